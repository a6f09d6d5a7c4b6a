//! Configuration loading

pub mod loader;

pub use loader::{AppConfig, BackendConfig, ConfigLoader, ReplConfig, TranscriptConfig};
