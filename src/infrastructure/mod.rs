//! Infrastructure layer: configuration loading and session persistence
//! adapters.

pub mod config;
pub mod storage;

pub use config::{ConfigError, ConfigLoader};
pub use storage::{InMemorySessionStore, JsonFileSessionStore};
