//! Registry of soldier prototypes
//!
//! Keys are unique; re-registering a key replaces its template but keeps
//! its place in listing order.

use ahash::AHashMap;

use crate::core::error::{Result, WargameError};
use crate::soldier::Soldier;

/// Named soldier templates in registration order
#[derive(Debug, Clone, Default)]
pub struct PrototypeRegistry {
    /// Templates indexed by key
    prototypes: AHashMap<String, Soldier>,
    /// Keys in first-registration order
    order: Vec<String>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template, replacing any previous template under `key`
    pub fn register(&mut self, key: impl Into<String>, soldier: Soldier) {
        let key = key.into();
        tracing::info!("Registering prototype '{}' from {}", key, soldier.name());
        if self.prototypes.insert(key.clone(), soldier).is_none() {
            self.order.push(key);
        }
    }

    /// Remove a template; absent keys are ignored
    pub fn remove(&mut self, key: &str) -> Option<Soldier> {
        let removed = self.prototypes.remove(key)?;
        self.order.retain(|k| k != key);
        tracing::info!("Removed prototype '{}'", key);
        Some(removed)
    }

    /// Fresh independent copy of the template under `key`
    pub fn clone_prototype(&self, key: &str) -> Result<Soldier> {
        let prototype = self
            .prototypes
            .get(key)
            .ok_or_else(|| WargameError::PrototypeNotFound(key.to_string()))?;
        let clone = prototype.prototype_clone();
        tracing::debug!("Cloned prototype '{}' into {}", key, clone.id());
        Ok(clone)
    }

    pub fn get(&self, key: &str) -> Option<&Soldier> {
        self.prototypes.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.prototypes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// All `(key, template)` pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Soldier)> {
        self.order
            .iter()
            .filter_map(|key| self.prototypes.get(key).map(|s| (key.as_str(), s)))
    }
}
