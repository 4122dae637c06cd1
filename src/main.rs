//! Wargame - Entry Point
//!
//! Interactive terminal front end over a single in-memory `Session`.
//! Multi-argument commands separate their arguments with `|`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wargame::core::error::{Result, WargameError};
use wargame::{Battalion, HelmetType, Rank, Session, SkillType, SoldierDraft, WargameConfig, WeaponType};

/// Wargame - build soldiers, register prototypes, clone battalions
#[derive(Parser, Debug)]
#[command(name = "wargame")]
#[command(about = "Soldier builder, prototype registry and battalion manager")]
struct Args {
    /// TOML file with builder defaults and seed prototypes
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start without the stock prototypes
    #[arg(long)]
    empty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wargame=info")),
        )
        .init();

    let mut config = match &args.config {
        Some(path) => WargameConfig::load(path)?,
        None => WargameConfig::default(),
    };
    if args.empty {
        config.prototypes.clear();
    }
    let mut session = Session::from_config(&config)?;

    println!("\n=== WARGAME ===");
    println!("Builder, Prototype and Battalion manager");
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;

        if dispatch(&mut session, &line, &mut lines)? == Flow::Quit {
            break;
        }
    }

    println!("\nGoodbye! {}", session.summary());
    Ok(())
}

/// Whether the loop keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run one command line against the session
///
/// Command failures are printed and the session stays usable. Only a
/// failure of the terminal itself (reading a confirmation) is returned.
fn dispatch<B: BufRead>(session: &mut Session, line: &str, lines: &mut io::Lines<B>) -> io::Result<Flow> {
    let input = line.trim();
    if input.is_empty() {
        return Ok(Flow::Continue);
    }

    let (command, rest) = input.split_once(' ').unwrap_or((input, ""));
    let rest = rest.trim();

    let outcome = match command {
        "quit" | "q" => return Ok(Flow::Quit),
        "help" | "h" => {
            print_help();
            Ok(())
        }
        "list" | "l" => {
            print_roster(session);
            Ok(())
        }
        "build" => build(session, rest),
        "clone" => session.clone_into_registry(rest).map(|key| {
            println!("Cloned and registered as prototype: {}", key);
        }),
        "register" => register_saved(session, rest),
        "unregister" => {
            unregister(session, rest, lines)?;
            Ok(())
        }
        "unsave" => {
            unsave(session, rest, lines)?;
            Ok(())
        }
        "battalion" => create_battalion(session, rest),
        "mixed" => create_mixed_battalion(session, rest),
        "show" => {
            match battalion_at(session, rest) {
                Some(battalion) => print_battalion(battalion),
                None => println!("No battalion #{}", rest),
            }
            Ok(())
        }
        "disband" => {
            disband(session, rest, lines)?;
            Ok(())
        }
        "summary" | "s" => {
            println!("{}", session.summary());
            Ok(())
        }
        "export" => export(session, rest),
        "catalog" => {
            print_catalog();
            Ok(())
        }
        _ => {
            println!("Unknown command. Type 'help' for the command list.");
            Ok(())
        }
    };

    if let Err(e) = outcome {
        if !(e.is_validation() || e.is_not_found()) {
            tracing::warn!("Command '{}' failed: {}", command, e);
        }
        println!("Error: {}", e);
    }
    Ok(Flow::Continue)
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  list / l                               - Show prototypes, saved soldiers, battalions");
    println!("  catalog                                - Show ranks, weapons, helmets and skills");
    println!("  build name=<n> | <field>=<v> ...       - Build and save a soldier");
    println!("        fields: rank health armor speed primary secondary helmet");
    println!("                skills=<a,b> faction elite=<true|false> proto=<key>");
    println!("  clone <key>                            - Clone a prototype into a new prototype");
    println!("  register <saved#> | <key>              - Register a saved soldier as a prototype");
    println!("  unregister <key>                       - Remove a prototype");
    println!("  unsave <saved#>                        - Remove a saved soldier");
    println!("  battalion <name> | <key> | <count>     - Clone one prototype into a battalion");
    println!("  mixed <name> | <key,key,...> | <count> - Cycle prototypes into a battalion");
    println!("  show <battalion#>                      - List a battalion's soldiers");
    println!("  disband <battalion#>                   - Remove a battalion");
    println!("  summary / s                            - Dashboard totals");
    println!("  export [path]                          - Dump the roster as JSON");
    println!("  quit / q                               - Exit");
    println!();
}

fn split_args(rest: &str) -> Vec<&str> {
    rest.split('|').map(str::trim).collect()
}

fn parse_number(field: &str, value: &str) -> Result<i32> {
    value
        .parse()
        .map_err(|_| WargameError::InvalidInput(format!("{} must be a number, got '{}'", field, value)))
}

fn parse_count(value: &str) -> Result<usize> {
    value
        .parse()
        .map_err(|_| WargameError::InvalidInput(format!("count must be a whole number, got '{}'", value)))
}

fn unknown(kind: &str, value: &str) -> WargameError {
    WargameError::InvalidInput(format!("unknown {} '{}' (see 'catalog')", kind, value))
}

fn build(session: &mut Session, rest: &str) -> Result<()> {
    let mut draft = SoldierDraft::named("", session.defaults());
    let mut proto_key = String::new();

    for pair in split_args(rest).into_iter().filter(|p| !p.is_empty()) {
        let Some((field, value)) = pair.split_once('=') else {
            println!("Ignoring '{}': expected <field>=<value>", pair);
            continue;
        };
        let value = value.trim();
        match field.trim() {
            "name" => draft.name = value.to_string(),
            "rank" => draft.rank = Rank::from_name(value).ok_or_else(|| unknown("rank", value))?,
            "health" => draft.health = parse_number("health", value)?,
            "armor" => draft.armor = parse_number("armor", value)?,
            "speed" => draft.speed = parse_number("speed", value)?,
            "primary" => {
                draft.primary_weapon = WeaponType::from_name(value).ok_or_else(|| unknown("weapon", value))?
            }
            "secondary" => {
                draft.secondary_weapon = WeaponType::from_name(value).ok_or_else(|| unknown("weapon", value))?
            }
            "helmet" => draft.helmet = HelmetType::from_name(value).ok_or_else(|| unknown("helmet", value))?,
            "skills" => {
                draft.skills = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| SkillType::from_name(s).ok_or_else(|| unknown("skill", s)))
                    .collect::<Result<Vec<_>>>()?
            }
            "faction" => draft.faction = value.to_string(),
            "elite" => draft.is_elite = matches!(value, "true" | "yes" | "y" | "1"),
            "proto" => proto_key = value.to_string(),
            other => println!("Ignoring unknown field '{}'", other),
        }
    }

    let soldier = session.build_soldier(&draft)?;
    let power = soldier.combat_power();
    let id = session.save_soldier_as_prototype(soldier, &proto_key);
    if proto_key.trim().is_empty() {
        println!("Soldier [{}] saved - POWER: {}", id, power);
    } else {
        println!("Soldier [{}] saved and registered as prototype: \"{}\"", id, proto_key.trim());
    }
    Ok(())
}

fn register_saved(session: &mut Session, rest: &str) -> Result<()> {
    let args = split_args(rest);
    let (Some(index), Some(key)) = (args.first(), args.get(1)) else {
        println!("Usage: register <saved#> | <key>");
        return Ok(());
    };
    if key.is_empty() {
        println!("Prototype key cannot be empty");
        return Ok(());
    }
    match saved_id_at(session, index) {
        Some(id) if session.register_saved(id, key) => println!("Registered prototype '{}'", key),
        _ => println!("No saved soldier #{}", index),
    }
    Ok(())
}

fn create_battalion(session: &mut Session, rest: &str) -> Result<()> {
    let args = split_args(rest);
    let [name, key, count] = args.as_slice() else {
        println!("Usage: battalion <name> | <key> | <count>");
        return Ok(());
    };
    if name.is_empty() {
        println!("Battalion name cannot be empty");
        return Ok(());
    }
    let count = parse_count(count)?;

    let battalion = session.create_battalion(name, key, count)?;
    println!("Battalion '{}' created with {} clones of [{}]", battalion.name(), battalion.len(), key);
    Ok(())
}

fn create_mixed_battalion(session: &mut Session, rest: &str) -> Result<()> {
    let args = split_args(rest);
    let [name, keys, count] = args.as_slice() else {
        println!("Usage: mixed <name> | <key,key,...> | <count>");
        return Ok(());
    };
    let keys: Vec<&str> = keys.split(',').map(str::trim).filter(|k| !k.is_empty()).collect();
    let count = parse_count(count)?;

    let battalion = session.create_mixed_battalion(name, keys.as_slice(), count)?;
    println!("{}", battalion);
    Ok(())
}

fn confirm<B: BufRead>(prompt: &str, lines: &mut io::Lines<B>) -> io::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let answer = match lines.next() {
        Some(line) => line?,
        None => return Ok(false),
    };
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn unregister<B: BufRead>(session: &mut Session, key: &str, lines: &mut io::Lines<B>) -> io::Result<()> {
    if !session.registry().contains(key) {
        println!("No prototype '{}'", key);
        return Ok(());
    }
    if confirm(&format!("Remove prototype '{}'?", key), lines)? {
        session.remove_prototype(key);
        println!("Prototype removed: {}", key);
    }
    Ok(())
}

fn unsave<B: BufRead>(session: &mut Session, index: &str, lines: &mut io::Lines<B>) -> io::Result<()> {
    let Some(id) = saved_id_at(session, index) else {
        println!("No saved soldier #{}", index);
        return Ok(());
    };
    if confirm(&format!("Remove saved soldier [{}]?", id), lines)? {
        session.remove_saved(id);
        println!("Soldier removed: {}", id);
    }
    Ok(())
}

fn disband<B: BufRead>(session: &mut Session, index: &str, lines: &mut io::Lines<B>) -> io::Result<()> {
    let Some((id, name)) = battalion_at(session, index).map(|b| (b.id(), b.name().to_string())) else {
        println!("No battalion #{}", index);
        return Ok(());
    };
    if confirm(&format!("Disband battalion '{}'?", name), lines)? {
        session.remove_battalion(id);
        println!("Battalion disbanded: {}", name);
    }
    Ok(())
}

fn export(session: &Session, path: &str) -> Result<()> {
    let json = session.export_json()?;
    if path.is_empty() {
        println!("{}", json);
    } else {
        std::fs::write(path, json)?;
        println!("Roster written to {}", path);
    }
    Ok(())
}

/// Listing numbers are 1-based
fn index_arg(arg: &str) -> Option<usize> {
    arg.trim().parse::<usize>().ok()?.checked_sub(1)
}

fn saved_id_at(session: &Session, arg: &str) -> Option<wargame::SoldierId> {
    session.saved_soldiers().get(index_arg(arg)?).map(|s| s.id())
}

fn battalion_at<'a>(session: &'a Session, arg: &str) -> Option<&'a Battalion> {
    session.battalions().get(index_arg(arg)?)
}

fn print_roster(session: &Session) {
    println!();
    println!("--- Prototypes ({}) ---", session.registry().len());
    for (key, soldier) in session.registry().iter() {
        println!("  {:<24} {}", key, soldier);
    }

    println!("--- Saved soldiers ({}) ---", session.saved_soldiers().len());
    for (i, soldier) in session.saved_soldiers().iter().enumerate() {
        println!("  #{:<3} {} ({})", i + 1, soldier, soldier.faction());
    }

    println!("--- Battalions ({}) ---", session.battalions().len());
    for (i, battalion) in session.battalions().iter().enumerate() {
        println!(
            "  #{:<3} {} | Elite: {} | Avg: {}",
            i + 1,
            battalion,
            battalion.elite_count(),
            battalion.average_combat_power()
        );
    }
    println!();
}

fn print_battalion(battalion: &Battalion) {
    println!();
    println!("SOLDIERS: {} [{}]", battalion.name().to_uppercase(), battalion.id());
    for soldier in battalion.soldiers() {
        let skills: Vec<_> = soldier.skills().iter().map(|s| s.display_name()).collect();
        println!(
            "  {} | {} | {} / {} | {} | {}{}",
            soldier,
            soldier.faction(),
            soldier.primary_weapon(),
            soldier.secondary_weapon(),
            soldier.helmet(),
            skills.join(", "),
            if soldier.is_elite() { " | ELITE" } else { "" }
        );
    }
    println!(
        "Total: {} | Average: {} | Elite: {}",
        battalion.total_combat_power(),
        battalion.average_combat_power(),
        battalion.elite_count()
    );
    println!();
}

fn print_catalog() {
    println!();
    println!("Ranks:   {}", join(Rank::ALL.iter()));
    println!("Weapons: {}", join(WeaponType::ALL.iter()));
    println!("Helmets: {}", join(HelmetType::ALL.iter()));
    println!("Skills:");
    for skill in SkillType::ALL {
        println!("  {:<28} {}", skill.to_string(), skill.description());
    }
    println!();
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
}
