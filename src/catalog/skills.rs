//! Combat and support skills

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillType {
    ExplosivesExpert,
    Medic,
    SniperTraining,
    Stealth,
    Engineer,
    Hacker,
    Commander,
    Survivalist,
}

impl SkillType {
    pub const ALL: [SkillType; 8] = [
        SkillType::ExplosivesExpert,
        SkillType::Medic,
        SkillType::SniperTraining,
        SkillType::Stealth,
        SkillType::Engineer,
        SkillType::Hacker,
        SkillType::Commander,
        SkillType::Survivalist,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SkillType::ExplosivesExpert => "Explosives Expert",
            SkillType::Medic => "Combat Medic",
            SkillType::SniperTraining => "Sniper Training",
            SkillType::Stealth => "Stealth Operations",
            SkillType::Engineer => "Field Engineer",
            SkillType::Hacker => "Cyber Hacker",
            SkillType::Commander => "Squad Commander",
            SkillType::Survivalist => "Survivalist",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SkillType::ExplosivesExpert => "Can handle grenades and C4",
            SkillType::Medic => "Can heal wounded allies",
            SkillType::SniperTraining => "Enhanced long-range accuracy",
            SkillType::Stealth => "Reduced detection range",
            SkillType::Engineer => "Can build and destroy structures",
            SkillType::Hacker => "Can disable enemy electronics",
            SkillType::Commander => "Boosts nearby allies' stats",
            SkillType::Survivalist => "Increased health regeneration",
        }
    }

    pub fn point_cost(&self) -> u32 {
        match self {
            SkillType::ExplosivesExpert => 30,
            SkillType::Medic => 25,
            SkillType::SniperTraining => 20,
            SkillType::Stealth => 20,
            SkillType::Engineer => 25,
            SkillType::Hacker => 35,
            SkillType::Commander => 40,
            SkillType::Survivalist => 15,
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            SkillType::ExplosivesExpert => "explosives_expert",
            SkillType::Medic => "medic",
            SkillType::SniperTraining => "sniper_training",
            SkillType::Stealth => "stealth",
            SkillType::Engineer => "engineer",
            SkillType::Hacker => "hacker",
            SkillType::Commander => "commander",
            SkillType::Survivalist => "survivalist",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        super::lookup(&Self::ALL, name, SkillType::tag, SkillType::display_name)
    }
}

impl fmt::Display for SkillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}pts)", self.display_name(), self.point_cost())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(SkillType::ALL.len(), 8);
    }

    #[test]
    fn test_display_and_lookup() {
        assert_eq!(SkillType::Hacker.to_string(), "Cyber Hacker (35pts)");
        assert_eq!(SkillType::from_name("medic"), Some(SkillType::Medic));
        assert_eq!(SkillType::from_name("combat medic"), Some(SkillType::Medic));
    }
}
