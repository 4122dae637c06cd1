pub mod config;
pub mod error;
pub mod types;

pub use config::{BuilderDefaults, PrototypeSeed, WargameConfig};
pub use error::{Result, WargameError};
pub use types::{BattalionId, SoldierId};
