//! Soldiers: the built entity, its skill set, and the validating builder
//!
//! Soldiers are only created through `SoldierBuilder::build` (directly or via
//! a `SoldierDraft`). Copies with a fresh identity come from
//! `Soldier::prototype_clone`.

pub mod builder;
pub mod draft;
pub mod skill_set;
pub mod model;

pub use builder::{SoldierBuilder, ARMOR_RANGE, HEALTH_RANGE, SPEED_RANGE};
pub use draft::SoldierDraft;
pub use skill_set::SkillSet;
pub use model::Soldier;
