//! Session state: the single owner of the registry, battalions and saved soldiers
//!
//! All mutation goes through `Session` methods; there is no global state.

pub mod controller;
pub mod summary;

pub use controller::Session;
pub use summary::SessionSummary;
