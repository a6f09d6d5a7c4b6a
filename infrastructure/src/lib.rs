//! Infrastructure layer for helpdesk-pilot
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod backend;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use backend::HttpAnswerGateway;
pub use config::{AppConfig, BackendConfig, ConfigLoader, ReplConfig, TranscriptConfig};
pub use logging::JsonlTranscriptLogger;
