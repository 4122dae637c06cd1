//! Roster-wide figures for the dashboard

use std::fmt;

use serde::Serialize;

/// Snapshot of session totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SessionSummary {
    pub prototypes: usize,
    pub battalions: usize,
    /// Saved soldiers plus every battalion member
    pub soldiers: usize,
    /// Combined power of all battalions
    pub total_power: u64,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Prototypes: {} | Battalions: {} | Soldiers: {} | Total power: {}",
            self.prototypes, self.battalions, self.soldiers, self.total_power
        )
    }
}
