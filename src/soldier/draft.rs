//! Raw soldier field values, as collected by a form or a config file

use serde::{Deserialize, Serialize};

use crate::catalog::{HelmetType, Rank, SkillType, WeaponType};
use crate::core::config::BuilderDefaults;
use crate::core::error::Result;
use crate::soldier::{Soldier, SoldierBuilder};

/// Unvalidated soldier fields
///
/// Every field goes through `SoldierBuilder`, so range and name checks
/// surface exactly as the builder reports them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoldierDraft {
    pub name: String,
    #[serde(default)]
    pub rank: Rank,
    pub health: i32,
    pub armor: i32,
    pub speed: i32,
    pub primary_weapon: WeaponType,
    pub secondary_weapon: WeaponType,
    pub helmet: HelmetType,
    #[serde(default)]
    pub skills: Vec<SkillType>,
    #[serde(default)]
    pub faction: String,
    #[serde(default)]
    pub is_elite: bool,
}

impl SoldierDraft {
    /// Draft pre-filled with the builder's default loadout
    pub fn named(name: impl Into<String>, defaults: &BuilderDefaults) -> Self {
        Self {
            name: name.into(),
            rank: defaults.rank,
            health: defaults.health as i32,
            armor: defaults.armor as i32,
            speed: defaults.speed as i32,
            primary_weapon: defaults.primary_weapon,
            secondary_weapon: defaults.secondary_weapon,
            helmet: defaults.helmet,
            skills: Vec::new(),
            faction: defaults.faction.clone(),
            is_elite: defaults.is_elite,
        }
    }

    /// Feed the draft through a builder
    ///
    /// A blank faction keeps the default faction.
    pub fn to_builder(&self, defaults: &BuilderDefaults) -> Result<SoldierBuilder> {
        let mut builder = SoldierBuilder::from_defaults(defaults);
        if !self.faction.trim().is_empty() {
            builder = builder.with_faction(self.faction.trim());
        }

        let builder = self.skills.iter().fold(
            builder
                .with_name(self.name.as_str())
                .with_rank(self.rank)
                .with_health(self.health)?
                .with_armor(self.armor)?
                .with_speed(self.speed)?
                .with_primary_weapon(self.primary_weapon)
                .with_secondary_weapon(self.secondary_weapon)
                .with_helmet(self.helmet)
                .as_elite(self.is_elite),
            |builder, skill| builder.with_skill(*skill),
        );
        Ok(builder)
    }

    pub fn build(&self, defaults: &BuilderDefaults) -> Result<Soldier> {
        self.to_builder(defaults)?.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::WargameError;

    #[test]
    fn test_draft_builds_all_fields() {
        let mut draft = SoldierDraft::named("Scout", &BuilderDefaults::default());
        draft.rank = Rank::Captain;
        draft.speed = 140;
        draft.skills = vec![SkillType::Stealth, SkillType::Stealth, SkillType::Hacker];
        draft.faction = "Recon".into();
        draft.is_elite = true;

        let soldier = draft.build(&BuilderDefaults::default()).unwrap();
        assert_eq!(soldier.name(), "Scout");
        assert_eq!(soldier.rank(), Rank::Captain);
        assert_eq!(soldier.speed(), 140);
        assert_eq!(soldier.skills().len(), 2);
        assert_eq!(soldier.faction(), "Recon");
        assert!(soldier.is_elite());
    }

    #[test]
    fn test_draft_surfaces_builder_errors() {
        let mut draft = SoldierDraft::named("Broken", &BuilderDefaults::default());
        draft.armor = 250;
        assert!(matches!(
            draft.build(&BuilderDefaults::default()),
            Err(WargameError::OutOfRange { field: "Armor", .. })
        ));

        let unnamed = SoldierDraft::named("", &BuilderDefaults::default());
        assert!(matches!(unnamed.build(&BuilderDefaults::default()), Err(WargameError::MissingName)));
    }

    #[test]
    fn test_draft_from_toml() {
        let draft: SoldierDraft = toml::from_str(
            r#"
            name = "Ghost"
            rank = "sergeant"
            health = 120
            armor = 60
            speed = 90
            primary_weapon = "sniper_rifle"
            secondary_weapon = "pistol"
            helmet = "stealth_helmet"
            skills = ["sniper_training", "stealth"]
            is_elite = true
            "#,
        )
        .unwrap();
        assert_eq!(draft.rank, Rank::Sergeant);
        assert_eq!(draft.skills, vec![SkillType::SniperTraining, SkillType::Stealth]);
        assert!(draft.faction.is_empty());
        assert_eq!(draft.build(&BuilderDefaults::default()).unwrap().faction(), "Unassigned");
    }
}
