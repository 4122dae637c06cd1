//! Roster configuration with documented defaults
//!
//! Covers the builder's default loadout and the prototypes a new session
//! is seeded with. Both can be overridden from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{HelmetType, Rank, SkillType, WeaponType};
use crate::core::error::{Result, WargameError};
use crate::soldier::{SoldierDraft, ARMOR_RANGE, HEALTH_RANGE, SPEED_RANGE};

/// Loadout a `SoldierBuilder` starts from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderDefaults {
    /// Rank when none is chosen (lowest rank)
    pub rank: Rank,

    /// Starting health, within 1-500
    pub health: u32,

    /// Starting armor, within 0-200
    pub armor: u32,

    /// Starting speed, within 1-150
    pub speed: u32,

    pub primary_weapon: WeaponType,
    pub secondary_weapon: WeaponType,
    pub helmet: HelmetType,

    /// Faction for soldiers that never pick one
    pub faction: String,

    pub is_elite: bool,
}

impl Default for BuilderDefaults {
    fn default() -> Self {
        Self {
            rank: Rank::lowest(),
            health: 100,
            armor: 50,
            speed: 60,
            primary_weapon: WeaponType::AssaultRifle,
            secondary_weapon: WeaponType::Pistol,
            helmet: HelmetType::CombatHelmet,
            faction: "Unassigned".into(),
            is_elite: false,
        }
    }
}

impl BuilderDefaults {
    /// Check stat defaults against the builder's ranges
    pub fn validate(&self) -> Result<()> {
        let stats = [
            ("Health", self.health, HEALTH_RANGE),
            ("Armor", self.armor, ARMOR_RANGE),
            ("Speed", self.speed, SPEED_RANGE),
        ];
        for (field, value, range) in stats {
            let value = i32::try_from(value).unwrap_or(i32::MAX);
            if !range.contains(&value) {
                return Err(WargameError::OutOfRange {
                    field,
                    value,
                    min: *range.start(),
                    max: *range.end(),
                });
            }
        }
        Ok(())
    }
}

/// A prototype registered when a session starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrototypeSeed {
    pub key: String,
    pub soldier: SoldierDraft,
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WargameConfig {
    #[serde(default)]
    pub defaults: BuilderDefaults,

    /// Registered in order; an empty list starts with an empty registry
    #[serde(default = "default_prototypes")]
    pub prototypes: Vec<PrototypeSeed>,
}

impl Default for WargameConfig {
    fn default() -> Self {
        Self {
            defaults: BuilderDefaults::default(),
            prototypes: default_prototypes(),
        }
    }
}

impl WargameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration without any seed prototypes
    pub fn empty() -> Self {
        Self {
            defaults: BuilderDefaults::default(),
            prototypes: Vec::new(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: WargameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded config from {} ({} prototypes)",
            path.display(),
            config.prototypes.len()
        );
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        self.defaults.validate()?;

        for (i, seed) in self.prototypes.iter().enumerate() {
            if seed.key.trim().is_empty() {
                return Err(WargameError::InvalidConfig(format!(
                    "prototype #{} has a blank key",
                    i + 1
                )));
            }
            if self.prototypes[..i].iter().any(|other| other.key == seed.key) {
                return Err(WargameError::InvalidConfig(format!(
                    "duplicate prototype key '{}'",
                    seed.key
                )));
            }
            seed.soldier.build(&self.defaults)?;
        }

        Ok(())
    }
}

/// The three stock templates
fn default_prototypes() -> Vec<PrototypeSeed> {
    vec![
        PrototypeSeed {
            key: "Sniper Elite".into(),
            soldier: SoldierDraft {
                name: "Ghost".into(),
                rank: Rank::Sergeant,
                health: 120,
                armor: 60,
                speed: 90,
                primary_weapon: WeaponType::SniperRifle,
                secondary_weapon: WeaponType::Pistol,
                helmet: HelmetType::StealthHelmet,
                skills: vec![SkillType::SniperTraining, SkillType::Stealth],
                faction: "Escuadrón Fantasma".into(),
                is_elite: true,
            },
        },
        PrototypeSeed {
            key: "Heavy Infantry".into(),
            soldier: SoldierDraft {
                name: "Tank".into(),
                rank: Rank::Corporal,
                health: 200,
                armor: 150,
                speed: 40,
                primary_weapon: WeaponType::MachineGun,
                secondary_weapon: WeaponType::Shotgun,
                helmet: HelmetType::TitaniumHelmet,
                skills: vec![SkillType::Survivalist],
                faction: "Muro de Hierro".into(),
                is_elite: false,
            },
        },
        PrototypeSeed {
            key: "Combat Medic".into(),
            soldier: SoldierDraft {
                name: "Doc".into(),
                rank: Rank::Lieutenant,
                health: 100,
                armor: 50,
                speed: 80,
                primary_weapon: WeaponType::Pistol,
                secondary_weapon: WeaponType::None,
                helmet: HelmetType::KevlarHelmet,
                skills: vec![SkillType::Medic, SkillType::Survivalist],
                faction: "Apoyo de Campo".into(),
                is_elite: false,
            },
        },
    ]
}
