//! Wargame - soldier builder, prototype registry and battalion manager

pub mod battalion;
pub mod catalog;
pub mod core;
pub mod prototype;
pub mod session;
pub mod soldier;

pub use crate::battalion::{Battalion, BattalionFactory};
pub use crate::catalog::{HelmetType, Rank, SkillType, WeaponType};
pub use crate::core::{BattalionId, Result, SoldierId, WargameConfig, WargameError};
pub use crate::prototype::PrototypeRegistry;
pub use crate::session::{Session, SessionSummary};
pub use crate::soldier::{Soldier, SoldierBuilder, SoldierDraft};
