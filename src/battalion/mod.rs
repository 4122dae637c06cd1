//! Battalions: named soldier collections and the factory that fills them
//!
//! A battalion owns its soldiers outright. Members produced by the factory
//! are independent prototype clones.

pub mod factory;
pub mod unit;

pub use factory::BattalionFactory;
pub use unit::Battalion;
