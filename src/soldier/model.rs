//! The built soldier record and its derived combat power

use std::fmt;

use serde::Serialize;

use crate::catalog::{HelmetType, Rank, WeaponType};
use crate::core::types::SoldierId;
use crate::soldier::SkillSet;

/// Name suffix marking a soldier as a prototype clone
pub const CLONE_SUFFIX: &str = " [Clone]";

/// Combat power bonus per learned skill
const SKILL_BONUS: u32 = 10;
/// Flat combat power bonus for elite soldiers
const ELITE_BONUS: u32 = 50;
/// Combat power per rank level
const RANK_BONUS: u32 = 5;

/// A fully configured soldier
///
/// `Clone` is a plain snapshot that keeps the id. Use
/// [`Soldier::prototype_clone`] for an independent copy with a new identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Soldier {
    pub(crate) id: SoldierId,
    pub(crate) name: String,
    pub(crate) rank: Rank,
    pub(crate) health: u32,
    pub(crate) armor: u32,
    pub(crate) speed: u32,
    pub(crate) primary_weapon: WeaponType,
    pub(crate) secondary_weapon: WeaponType,
    pub(crate) helmet: HelmetType,
    pub(crate) skills: SkillSet,
    pub(crate) faction: String,
    pub(crate) is_elite: bool,
}

impl Soldier {
    /// Copy every field into a new soldier with a fresh id and the clone suffix
    pub fn prototype_clone(&self) -> Soldier {
        Soldier {
            id: SoldierId::new(),
            name: format!("{}{}", self.name, CLONE_SUFFIX),
            skills: self.skills.clone(),
            faction: self.faction.clone(),
            ..*self
        }
    }

    /// Derived combat score, recomputed on every call
    pub fn combat_power(&self) -> u32 {
        let weapon_power = self.primary_weapon.damage() + self.secondary_weapon.damage() / 2;
        let elite_bonus = if self.is_elite { ELITE_BONUS } else { 0 };

        self.health
            + self.armor
            + self.speed
            + weapon_power
            + self.helmet.defense()
            + self.skills.len() as u32 * SKILL_BONUS
            + elite_bonus
            + self.rank.level() * RANK_BONUS
    }

    pub fn id(&self) -> SoldierId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn armor(&self) -> u32 {
        self.armor
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn primary_weapon(&self) -> WeaponType {
        self.primary_weapon
    }

    pub fn secondary_weapon(&self) -> WeaponType {
        self.secondary_weapon
    }

    pub fn helmet(&self) -> HelmetType {
        self.helmet
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    /// Skill set of this soldier only; clones never share it
    pub fn skills_mut(&mut self) -> &mut SkillSet {
        &mut self.skills
    }

    pub fn faction(&self) -> &str {
        &self.faction
    }

    pub fn is_elite(&self) -> bool {
        self.is_elite
    }
}

impl fmt::Display for Soldier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} | HP:{} ARM:{} SPD:{} | PWR:{}",
            self.id,
            self.rank.title(),
            self.name,
            self.health,
            self.armor,
            self.speed,
            self.combat_power()
        )
    }
}
