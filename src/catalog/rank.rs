//! Military ranks, lowest to highest

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rank of a soldier; `level` runs 1 (Private) to 7 (General)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    #[default]
    Private,
    Corporal,
    Sergeant,
    Lieutenant,
    Captain,
    Colonel,
    General,
}

impl Rank {
    pub const ALL: [Rank; 7] = [
        Rank::Private,
        Rank::Corporal,
        Rank::Sergeant,
        Rank::Lieutenant,
        Rank::Captain,
        Rank::Colonel,
        Rank::General,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Rank::Private => "Private",
            Rank::Corporal => "Corporal",
            Rank::Sergeant => "Sergeant",
            Rank::Lieutenant => "Lieutenant",
            Rank::Captain => "Captain",
            Rank::Colonel => "Colonel",
            Rank::General => "General",
        }
    }

    pub fn level(&self) -> u32 {
        match self {
            Rank::Private => 1,
            Rank::Corporal => 2,
            Rank::Sergeant => 3,
            Rank::Lieutenant => 4,
            Rank::Captain => 5,
            Rank::Colonel => 6,
            Rank::General => 7,
        }
    }

    /// Lowest rank; what an unconfigured builder assigns
    pub fn lowest() -> Self {
        Rank::Private
    }

    pub fn from_name(name: &str) -> Option<Self> {
        // Titles double as tags for ranks
        super::lookup(&Self::ALL, name, Rank::title, Rank::title)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Lv.{})", self.title(), self.level())
    }
}
