//! Helmet catalog

use std::fmt;

use serde::{Deserialize, Serialize};

/// Helmet worn by a soldier; `None` grants no defense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HelmetType {
    TitaniumHelmet,
    KevlarHelmet,
    BallisticHelmet,
    StealthHelmet,
    CombatHelmet,
    None,
}

impl HelmetType {
    pub const ALL: [HelmetType; 6] = [
        HelmetType::TitaniumHelmet,
        HelmetType::KevlarHelmet,
        HelmetType::BallisticHelmet,
        HelmetType::StealthHelmet,
        HelmetType::CombatHelmet,
        HelmetType::None,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            HelmetType::TitaniumHelmet => "Titanium Helmet",
            HelmetType::KevlarHelmet => "Kevlar Helmet",
            HelmetType::BallisticHelmet => "Ballistic Helmet",
            HelmetType::StealthHelmet => "Stealth Helmet",
            HelmetType::CombatHelmet => "Combat Helmet",
            HelmetType::None => "No Helmet",
        }
    }

    pub fn defense(&self) -> u32 {
        match self {
            HelmetType::TitaniumHelmet => 90,
            HelmetType::KevlarHelmet => 75,
            HelmetType::BallisticHelmet => 60,
            HelmetType::StealthHelmet => 50,
            HelmetType::CombatHelmet => 40,
            HelmetType::None => 0,
        }
    }

    pub fn weight_kg(&self) -> u32 {
        match self {
            HelmetType::TitaniumHelmet => 5,
            HelmetType::KevlarHelmet => 3,
            HelmetType::BallisticHelmet => 2,
            HelmetType::StealthHelmet => 4,
            HelmetType::CombatHelmet => 1,
            HelmetType::None => 0,
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            HelmetType::TitaniumHelmet => "titanium_helmet",
            HelmetType::KevlarHelmet => "kevlar_helmet",
            HelmetType::BallisticHelmet => "ballistic_helmet",
            HelmetType::StealthHelmet => "stealth_helmet",
            HelmetType::CombatHelmet => "combat_helmet",
            HelmetType::None => "none",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        super::lookup(&Self::ALL, name, HelmetType::tag, HelmetType::display_name)
    }
}

impl fmt::Display for HelmetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (DEF:{})", self.display_name(), self.defense())
    }
}
