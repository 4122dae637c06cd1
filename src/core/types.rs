//! Core type definitions used throughout the codebase

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for soldiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoldierId(pub Uuid);

impl SoldierId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Short upper-case tag shown in listings (8 hex chars)
    pub fn short(&self) -> String {
        short_tag(&self.0, 8)
    }
}

impl Default for SoldierId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SoldierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short())
    }
}

/// Unique identifier for battalions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BattalionId(pub Uuid);

impl BattalionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Short upper-case tag shown in listings (6 hex chars)
    pub fn short(&self) -> String {
        short_tag(&self.0, 6)
    }
}

impl Default for BattalionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BattalionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short())
    }
}

fn short_tag(id: &Uuid, len: usize) -> String {
    id.simple().to_string()[..len].to_uppercase()
}
