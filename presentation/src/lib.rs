//! Presentation layer for helpdesk-pilot
//!
//! This crate contains CLI definitions, output formatting, the busy
//! spinner, and the interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::BusySpinner;
