//! Battalion entity with aggregate statistics

use std::fmt;

use serde::Serialize;

use crate::core::types::{BattalionId, SoldierId};
use crate::soldier::Soldier;

/// A named, ordered collection of soldiers
#[derive(Debug, Clone, Serialize)]
pub struct Battalion {
    id: BattalionId,
    name: String,
    soldiers: Vec<Soldier>,
}

impl Battalion {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_soldiers(name, Vec::new())
    }

    pub fn with_soldiers(name: impl Into<String>, soldiers: Vec<Soldier>) -> Self {
        Self {
            id: BattalionId::new(),
            name: name.into(),
            soldiers,
        }
    }

    pub fn id(&self) -> BattalionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Members in insertion order
    pub fn soldiers(&self) -> &[Soldier] {
        &self.soldiers
    }

    pub fn add_soldier(&mut self, soldier: Soldier) {
        self.soldiers.push(soldier);
    }

    /// Remove the first member with this id
    pub fn remove_soldier(&mut self, id: SoldierId) -> Option<Soldier> {
        let index = self.soldiers.iter().position(|s| s.id() == id)?;
        Some(self.soldiers.remove(index))
    }

    pub fn len(&self) -> usize {
        self.soldiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.soldiers.is_empty()
    }

    /// Sum of member combat power (0 when empty)
    pub fn total_combat_power(&self) -> u64 {
        self.soldiers.iter().map(|s| u64::from(s.combat_power())).sum()
    }

    /// Truncating mean of member combat power (0 when empty)
    pub fn average_combat_power(&self) -> u64 {
        if self.soldiers.is_empty() {
            return 0;
        }
        self.total_combat_power() / self.soldiers.len() as u64
    }

    pub fn elite_count(&self) -> usize {
        self.soldiers.iter().filter(|s| s.is_elite()).count()
    }
}

impl fmt::Display for Battalion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Battalion [{}] '{}' | Soldiers: {} | Power: {}",
            self.id,
            self.name,
            self.soldiers.len(),
            self.total_combat_power()
        )
    }
}
