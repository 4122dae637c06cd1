//! Prototype registry: named soldier templates cloned on demand

pub mod registry;

pub use registry::PrototypeRegistry;
