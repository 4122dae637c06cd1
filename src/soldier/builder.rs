//! Fluent, validating soldier builder
//!
//! Range-checked setters return `Result<Self>`. A rejected value consumes
//! the builder, so clone it first to retry a single field, or rebuild from
//! raw values through `SoldierDraft`.

use std::ops::RangeInclusive;

use crate::catalog::{HelmetType, Rank, SkillType, WeaponType};
use crate::core::config::BuilderDefaults;
use crate::core::error::{Result, WargameError};
use crate::core::types::SoldierId;
use crate::soldier::{SkillSet, Soldier};

pub const HEALTH_RANGE: RangeInclusive<i32> = 1..=500;
pub const ARMOR_RANGE: RangeInclusive<i32> = 0..=200;
pub const SPEED_RANGE: RangeInclusive<i32> = 1..=150;

/// Accumulates soldier configuration until `build` is called
#[derive(Debug, Clone)]
pub struct SoldierBuilder {
    name: String,
    rank: Rank,
    health: u32,
    armor: u32,
    speed: u32,
    primary: WeaponType,
    secondary: WeaponType,
    helmet: HelmetType,
    skills: SkillSet,
    faction: String,
    is_elite: bool,
}

impl Default for SoldierBuilder {
    fn default() -> Self {
        Self::from_defaults(&BuilderDefaults::default())
    }
}

impl SoldierBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a configured default loadout
    ///
    /// Stat defaults are trusted here; `BuilderDefaults::validate` guards
    /// them when they come from a config file.
    pub fn from_defaults(defaults: &BuilderDefaults) -> Self {
        Self {
            name: String::new(),
            rank: defaults.rank,
            health: defaults.health,
            armor: defaults.armor,
            speed: defaults.speed,
            primary: defaults.primary_weapon,
            secondary: defaults.secondary_weapon,
            helmet: defaults.helmet,
            skills: SkillSet::new(),
            faction: defaults.faction.clone(),
            is_elite: defaults.is_elite,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_rank(mut self, rank: Rank) -> Self {
        self.rank = rank;
        self
    }

    pub fn with_health(mut self, health: i32) -> Result<Self> {
        self.health = check_range("Health", health, HEALTH_RANGE)?;
        Ok(self)
    }

    pub fn with_armor(mut self, armor: i32) -> Result<Self> {
        self.armor = check_range("Armor", armor, ARMOR_RANGE)?;
        Ok(self)
    }

    pub fn with_speed(mut self, speed: i32) -> Result<Self> {
        self.speed = check_range("Speed", speed, SPEED_RANGE)?;
        Ok(self)
    }

    pub fn with_primary_weapon(mut self, weapon: WeaponType) -> Self {
        self.primary = weapon;
        self
    }

    pub fn with_secondary_weapon(mut self, weapon: WeaponType) -> Self {
        self.secondary = weapon;
        self
    }

    pub fn with_helmet(mut self, helmet: HelmetType) -> Self {
        self.helmet = helmet;
        self
    }

    /// Add a skill; repeated skills are ignored
    pub fn with_skill(mut self, skill: SkillType) -> Self {
        self.skills.insert(skill);
        self
    }

    pub fn with_faction(mut self, faction: impl Into<String>) -> Self {
        self.faction = faction.into();
        self
    }

    pub fn as_elite(mut self, elite: bool) -> Self {
        self.is_elite = elite;
        self
    }

    /// Validate and produce a soldier with a fresh id
    ///
    /// Borrows the builder so the same configuration can stamp out
    /// several soldiers, each with its own id and skill set.
    pub fn build(&self) -> Result<Soldier> {
        if self.name.trim().is_empty() {
            return Err(WargameError::MissingName);
        }

        let soldier = Soldier {
            id: SoldierId::new(),
            name: self.name.clone(),
            rank: self.rank,
            health: self.health,
            armor: self.armor,
            speed: self.speed,
            primary_weapon: self.primary,
            secondary_weapon: self.secondary,
            helmet: self.helmet,
            skills: self.skills.clone(),
            faction: self.faction.clone(),
            is_elite: self.is_elite,
        };
        tracing::debug!("Built soldier {}", soldier);
        Ok(soldier)
    }

    /// Discard all configuration and start over
    pub fn reset(self) -> Self {
        Self::new()
    }
}

fn check_range(field: &'static str, value: i32, range: RangeInclusive<i32>) -> Result<u32> {
    if !range.contains(&value) {
        return Err(WargameError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    // Every range starts at 0 or above
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let soldier = SoldierBuilder::new().with_name("Recruit").build().unwrap();
        assert_eq!(soldier.rank(), Rank::Private);
        assert_eq!(soldier.health(), 100);
        assert_eq!(soldier.armor(), 50);
        assert_eq!(soldier.speed(), 60);
        assert_eq!(soldier.primary_weapon(), WeaponType::AssaultRifle);
        assert_eq!(soldier.secondary_weapon(), WeaponType::Pistol);
        assert_eq!(soldier.helmet(), HelmetType::CombatHelmet);
        assert!(soldier.skills().is_empty());
        assert_eq!(soldier.faction(), "Unassigned");
        assert!(!soldier.is_elite());
    }

    #[test]
    fn test_range_boundaries() {
        assert!(SoldierBuilder::new().with_health(1).is_ok());
        assert!(SoldierBuilder::new().with_health(500).is_ok());
        assert!(SoldierBuilder::new().with_health(0).is_err());
        assert!(SoldierBuilder::new().with_health(501).is_err());

        assert!(SoldierBuilder::new().with_armor(0).is_ok());
        assert!(SoldierBuilder::new().with_armor(200).is_ok());
        assert!(SoldierBuilder::new().with_armor(-1).is_err());
        assert!(SoldierBuilder::new().with_armor(201).is_err());

        assert!(SoldierBuilder::new().with_speed(1).is_ok());
        assert!(SoldierBuilder::new().with_speed(150).is_ok());
        assert!(SoldierBuilder::new().with_speed(0).is_err());
        assert!(SoldierBuilder::new().with_speed(151).is_err());
    }

    #[test]
    fn test_out_of_range_reports_field() {
        let err = SoldierBuilder::new().with_speed(200).unwrap_err();
        assert!(err.is_validation());
        match err {
            WargameError::OutOfRange { field, value, min, max } => {
                assert_eq!(field, "Speed");
                assert_eq!((value, min, max), (200, 1, 150));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_cloned_builder_survives_rejected_value() {
        let base = SoldierBuilder::new().with_name("Rook").with_rank(Rank::Captain);
        assert!(base.clone().with_health(0).is_err());

        let soldier = base.with_health(250).unwrap().build().unwrap();
        assert_eq!(soldier.name(), "Rook");
        assert_eq!(soldier.rank(), Rank::Captain);
        assert_eq!(soldier.health(), 250);
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(matches!(SoldierBuilder::new().build(), Err(WargameError::MissingName)));
        assert!(matches!(
            SoldierBuilder::new().with_name("   ").build(),
            Err(WargameError::MissingName)
        ));
    }

    #[test]
    fn test_duplicate_skills_ignored() {
        let soldier = SoldierBuilder::new()
            .with_name("Dup")
            .with_skill(SkillType::Medic)
            .with_skill(SkillType::Hacker)
            .with_skill(SkillType::Medic)
            .build()
            .unwrap();
        let skills: Vec<_> = soldier.skills().iter().copied().collect();
        assert_eq!(skills, vec![SkillType::Medic, SkillType::Hacker]);
    }

    #[test]
    fn test_build_does_not_alias_skills() {
        let builder = SoldierBuilder::new().with_name("Twin").with_skill(SkillType::Stealth);
        let mut first = builder.build().unwrap();
        let second = builder.build().unwrap();

        assert_ne!(first.id(), second.id());
        first.skills_mut().insert(SkillType::Engineer);
        assert_eq!(second.skills().len(), 1);
    }

    #[test]
    fn test_reset_discards_configuration() {
        let builder = SoldierBuilder::new()
            .with_name("Old")
            .with_rank(Rank::General)
            .with_skill(SkillType::Commander)
            .reset();
        assert!(builder.build().is_err());

        let soldier = builder.with_name("New").build().unwrap();
        assert_eq!(soldier.rank(), Rank::Private);
        assert!(soldier.skills().is_empty());
    }
}
