//! Weapon catalog
//!
//! Each weapon has a display name, a flat damage value and an icon.
//! `None` is the unarmed sentinel and contributes no damage.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type of weapon a soldier can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    AssaultRifle,
    SniperRifle,
    Shotgun,
    MachineGun,
    RocketLauncher,
    Pistol,
    /// Unarmed
    None,
}

/// Display metadata and damage for a weapon type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponProfile {
    pub display_name: &'static str,
    pub damage: u32,
    pub icon: &'static str,
}

impl WeaponType {
    pub const ALL: [WeaponType; 7] = [
        WeaponType::AssaultRifle,
        WeaponType::SniperRifle,
        WeaponType::Shotgun,
        WeaponType::MachineGun,
        WeaponType::RocketLauncher,
        WeaponType::Pistol,
        WeaponType::None,
    ];

    /// Get the catalog entry for this weapon
    pub fn profile(&self) -> WeaponProfile {
        let (display_name, damage, icon) = match self {
            WeaponType::AssaultRifle => ("Assault Rifle", 75, "⚔"),
            WeaponType::SniperRifle => ("Sniper Rifle", 95, "🎯"),
            WeaponType::Shotgun => ("Shotgun", 85, "💥"),
            WeaponType::MachineGun => ("Machine Gun", 70, "🔫"),
            WeaponType::RocketLauncher => ("Rocket Launcher", 100, "🚀"),
            WeaponType::Pistol => ("Pistol", 40, "🔸"),
            WeaponType::None => ("Unarmed", 0, "✋"),
        };
        WeaponProfile { display_name, damage, icon }
    }

    pub fn display_name(&self) -> &'static str {
        self.profile().display_name
    }

    pub fn damage(&self) -> u32 {
        self.profile().damage
    }

    pub fn icon(&self) -> &'static str {
        self.profile().icon
    }

    fn tag(&self) -> &'static str {
        match self {
            WeaponType::AssaultRifle => "assault_rifle",
            WeaponType::SniperRifle => "sniper_rifle",
            WeaponType::Shotgun => "shotgun",
            WeaponType::MachineGun => "machine_gun",
            WeaponType::RocketLauncher => "rocket_launcher",
            WeaponType::Pistol => "pistol",
            WeaponType::None => "none",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        super::lookup(&Self::ALL, name, WeaponType::tag, WeaponType::display_name)
    }
}

impl fmt::Display for WeaponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.display_name())
    }
}
