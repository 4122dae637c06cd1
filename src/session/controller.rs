//! Application controller wiring builder, registry and factory together

use serde::Serialize;

use crate::battalion::{Battalion, BattalionFactory};
use crate::core::config::{BuilderDefaults, WargameConfig};
use crate::core::error::Result;
use crate::core::types::{BattalionId, SoldierId};
use crate::prototype::PrototypeRegistry;
use crate::session::SessionSummary;
use crate::soldier::{Soldier, SoldierBuilder, SoldierDraft};

/// One user's in-memory roster
#[derive(Debug, Clone, Default)]
pub struct Session {
    defaults: BuilderDefaults,
    registry: PrototypeRegistry,
    battalions: Vec<Battalion>,
    saved: Vec<Soldier>,
}

/// Serialized view used by `Session::export_json`
#[derive(Serialize)]
struct RosterExport<'a> {
    summary: SessionSummary,
    prototypes: Vec<PrototypeExport<'a>>,
    saved_soldiers: &'a [Soldier],
    battalions: &'a [Battalion],
}

#[derive(Serialize)]
struct PrototypeExport<'a> {
    key: &'a str,
    soldier: &'a Soldier,
}

impl Session {
    /// Session seeded with the stock prototypes
    pub fn new() -> Result<Self> {
        Self::from_config(&WargameConfig::default())
    }

    /// Session with no prototypes, battalions or saved soldiers
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_config(config: &WargameConfig) -> Result<Self> {
        config.defaults.validate()?;

        let mut session = Self {
            defaults: config.defaults.clone(),
            ..Self::default()
        };
        for seed in &config.prototypes {
            let soldier = seed.soldier.build(&session.defaults)?;
            session.registry.register(seed.key.as_str(), soldier);
        }

        tracing::info!("Session ready with {} prototypes", session.registry.len());
        Ok(session)
    }

    // === BUILDER ===

    pub fn defaults(&self) -> &BuilderDefaults {
        &self.defaults
    }

    /// Fresh builder starting from this session's default loadout
    pub fn builder(&self) -> SoldierBuilder {
        SoldierBuilder::from_defaults(&self.defaults)
    }

    /// Build a soldier from raw field values
    pub fn build_soldier(&self, draft: &SoldierDraft) -> Result<Soldier> {
        draft.build(&self.defaults).inspect_err(|e| {
            tracing::warn!("Rejected soldier '{}': {}", draft.name, e);
        })
    }

    // === SAVED SOLDIERS ===

    pub fn save_soldier(&mut self, soldier: Soldier) -> SoldierId {
        let id = soldier.id();
        tracing::info!("Saved soldier {}", soldier);
        self.saved.push(soldier);
        id
    }

    /// Save a soldier and register a snapshot of it under `key`
    ///
    /// A blank key only saves.
    pub fn save_soldier_as_prototype(&mut self, soldier: Soldier, key: &str) -> SoldierId {
        let key = key.trim();
        if !key.is_empty() {
            self.registry.register(key, soldier.clone());
        }
        self.save_soldier(soldier)
    }

    pub fn remove_saved(&mut self, id: SoldierId) -> Option<Soldier> {
        let index = self.saved.iter().position(|s| s.id() == id)?;
        let removed = self.saved.remove(index);
        tracing::info!("Removed saved soldier {}", removed.id());
        Some(removed)
    }

    /// Register a snapshot of a saved soldier; false if no such soldier
    pub fn register_saved(&mut self, id: SoldierId, key: &str) -> bool {
        match self.saved.iter().find(|s| s.id() == id) {
            Some(soldier) => {
                let snapshot = soldier.clone();
                self.registry.register(key.trim(), snapshot);
                true
            }
            None => false,
        }
    }

    pub fn saved_soldiers(&self) -> &[Soldier] {
        &self.saved
    }

    // === PROTOTYPES ===

    pub fn registry(&self) -> &PrototypeRegistry {
        &self.registry
    }

    pub fn register_prototype(&mut self, key: &str, soldier: Soldier) {
        self.registry.register(key, soldier);
    }

    pub fn remove_prototype(&mut self, key: &str) -> Option<Soldier> {
        self.registry.remove(key)
    }

    pub fn clone_soldier(&self, key: &str) -> Result<Soldier> {
        self.registry.clone_prototype(key)
    }

    /// Clone a prototype and register the clone as a new prototype
    ///
    /// Returns the new key, `"{key} #clone-{id}"`.
    pub fn clone_into_registry(&mut self, key: &str) -> Result<String> {
        let clone = self.registry.clone_prototype(key)?;
        let new_key = format!("{} #clone-{}", key, clone.id());
        self.registry.register(new_key.as_str(), clone);
        Ok(new_key)
    }

    // === BATTALIONS ===

    pub fn create_battalion(&mut self, name: &str, prototype_key: &str, count: usize) -> Result<&Battalion> {
        let battalion = BattalionFactory::new(&self.registry).create_battalion(name, prototype_key, count)?;
        Ok(self.push_battalion(battalion))
    }

    pub fn create_mixed_battalion<S: AsRef<str>>(
        &mut self,
        name: &str,
        keys: &[S],
        total_count: usize,
    ) -> Result<&Battalion> {
        let battalion = BattalionFactory::new(&self.registry).create_mixed_battalion(name, keys, total_count)?;
        Ok(self.push_battalion(battalion))
    }

    fn push_battalion(&mut self, battalion: Battalion) -> &Battalion {
        self.battalions.push(battalion);
        let last = self.battalions.len() - 1;
        &self.battalions[last]
    }

    pub fn battalions(&self) -> &[Battalion] {
        &self.battalions
    }

    pub fn battalion(&self, id: BattalionId) -> Option<&Battalion> {
        self.battalions.iter().find(|b| b.id() == id)
    }

    pub fn battalion_mut(&mut self, id: BattalionId) -> Option<&mut Battalion> {
        self.battalions.iter_mut().find(|b| b.id() == id)
    }

    pub fn remove_battalion(&mut self, id: BattalionId) -> Option<Battalion> {
        let index = self.battalions.iter().position(|b| b.id() == id)?;
        let removed = self.battalions.remove(index);
        tracing::info!("Disbanded {}", removed);
        Some(removed)
    }

    // === REPORTING ===

    pub fn summary(&self) -> SessionSummary {
        let members: usize = self.battalions.iter().map(Battalion::len).sum();
        SessionSummary {
            prototypes: self.registry.len(),
            battalions: self.battalions.len(),
            soldiers: self.saved.len() + members,
            total_power: self.battalions.iter().map(Battalion::total_combat_power).sum(),
        }
    }

    /// Pretty-printed JSON of the whole roster
    pub fn export_json(&self) -> Result<String> {
        let export = RosterExport {
            summary: self.summary(),
            prototypes: self
                .registry
                .iter()
                .map(|(key, soldier)| PrototypeExport { key, soldier })
                .collect(),
            saved_soldiers: &self.saved,
            battalions: &self.battalions,
        };
        Ok(serde_json::to_string_pretty(&export)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Rank, SkillType};

    #[test]
    fn test_new_session_is_seeded() {
        let session = Session::new().unwrap();
        let keys: Vec<_> = session.registry().keys().collect();
        assert_eq!(keys, vec!["Sniper Elite", "Heavy Infantry", "Combat Medic"]);
        assert!(session.battalions().is_empty());
        assert!(session.saved_soldiers().is_empty());
    }

    #[test]
    fn test_seed_stat_blocks() {
        let session = Session::new().unwrap();
        let ghost = session.registry().get("Sniper Elite").unwrap();
        assert_eq!(ghost.name(), "Ghost");
        assert_eq!(ghost.rank(), Rank::Sergeant);
        assert!(ghost.is_elite());
        // 120 + 60 + 90 + (95 + 20) + 50 + 20 + 50 + 15
        assert_eq!(ghost.combat_power(), 520);

        let doc = session.registry().get("Combat Medic").unwrap();
        assert!(doc.skills().contains(SkillType::Medic));
        // 100 + 50 + 80 + (40 + 0) + 75 + 20 + 0 + 20
        assert_eq!(doc.combat_power(), 385);
    }

    #[test]
    fn test_build_soldier_surfaces_validation() {
        let session = Session::empty();
        let mut draft = SoldierDraft::named("Rook", &BuilderDefaults::default());
        draft.health = 0;
        assert!(session.build_soldier(&draft).unwrap_err().is_validation());
    }

    #[test]
    fn test_save_and_remove() {
        let mut session = Session::empty();
        let soldier = session.builder().with_name("Rook").build().unwrap();
        let id = session.save_soldier(soldier);
        assert_eq!(session.saved_soldiers().len(), 1);

        assert!(session.remove_saved(id).is_some());
        assert!(session.remove_saved(id).is_none());
        assert!(session.saved_soldiers().is_empty());
    }

    #[test]
    fn test_save_as_prototype() {
        let mut session = Session::empty();
        let soldier = session.builder().with_name("Rook").build().unwrap();
        let id = session.save_soldier_as_prototype(soldier, "  Rifleman ");

        assert_eq!(session.registry().get("Rifleman").unwrap().id(), id);

        let other = session.builder().with_name("Pawn").build().unwrap();
        session.save_soldier_as_prototype(other, "   ");
        assert_eq!(session.registry().len(), 1);
        assert_eq!(session.saved_soldiers().len(), 2);
    }

    #[test]
    fn test_register_saved() {
        let mut session = Session::empty();
        let soldier = session.builder().with_name("Rook").build().unwrap();
        let id = session.save_soldier(soldier);

        assert!(session.register_saved(id, "Rook"));
        assert!(!session.register_saved(SoldierId::new(), "Nobody"));
        assert_eq!(session.registry().len(), 1);
    }

    #[test]
    fn test_clone_into_registry() {
        let mut session = Session::new().unwrap();
        let key = session.clone_into_registry("Heavy Infantry").unwrap();

        assert!(key.starts_with("Heavy Infantry #clone-"));
        assert_eq!(session.registry().len(), 4);
        assert_eq!(session.registry().get(&key).unwrap().name(), "Tank [Clone]");
        assert!(session.clone_into_registry("Missing").unwrap_err().is_not_found());
    }

    #[test]
    fn test_create_and_remove_battalion() {
        let mut session = Session::new().unwrap();
        let id = session.create_battalion("Wall", "Heavy Infantry", 3).unwrap().id();
        assert_eq!(session.battalions().len(), 1);
        assert_eq!(session.battalion(id).unwrap().len(), 3);

        session.battalion_mut(id).unwrap().set_name("Iron Wall");
        assert_eq!(session.battalions()[0].name(), "Iron Wall");

        assert!(session.remove_battalion(id).is_some());
        assert!(session.remove_battalion(id).is_none());
        assert!(session.battalions().is_empty());
    }

    #[test]
    fn test_failed_battalion_is_not_registered() {
        let mut session = Session::new().unwrap();
        assert!(session.create_battalion("Zero", "Combat Medic", 0).is_err());
        assert!(session
            .create_mixed_battalion("Half", &["Combat Medic", "Nope"], 4)
            .is_err());
        assert!(session.battalions().is_empty());
    }

    #[test]
    fn test_summary() {
        let mut session = Session::new().unwrap();
        let soldier = session.builder().with_name("Rook").build().unwrap();
        session.save_soldier(soldier);
        session.create_battalion("Medics", "Combat Medic", 2).unwrap();
        session
            .create_mixed_battalion("Mixed", &["Sniper Elite", "Combat Medic"], 3)
            .unwrap();

        let summary = session.summary();
        assert_eq!(summary.prototypes, 3);
        assert_eq!(summary.battalions, 2);
        assert_eq!(summary.soldiers, 6);
        // Medics: 2 * 385; Mixed: 520 + 385 + 520
        assert_eq!(summary.total_power, 2 * 385 + 520 + 385 + 520);
    }

    #[test]
    fn test_export_json() {
        let mut session = Session::new().unwrap();
        session.create_battalion("Ghosts", "Sniper Elite", 2).unwrap();
        let rook = session.builder().with_name("Rook").build().unwrap();
        session.save_soldier(rook);

        let json = session.export_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["battalions"], 1);
        assert_eq!(value["prototypes"][0]["key"], "Sniper Elite");
        assert_eq!(value["battalions"][0]["name"], "Ghosts");
        assert_eq!(value["battalions"][0]["soldiers"][1]["primary_weapon"], "sniper_rifle");
        assert_eq!(value["saved_soldiers"][0]["name"], "Rook");
        assert_eq!(value["summary"]["soldiers"], 3);
    }
}
