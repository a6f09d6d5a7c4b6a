//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for helpdesk-pilot
#[derive(Parser, Debug)]
#[command(name = "helpdesk-pilot")]
#[command(author, version, about = "Terminal front-end for the corporate support assistant")]
#[command(long_about = r#"
Helpdesk Pilot turns the support backend's single ask endpoint into a
multi-turn dialogue: ask a question, read the answer, say whether it solved
your problem, and escalate to a support ticket when it didn't.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./helpdesk.toml     Project-level config
3. ~/.config/helpdesk-pilot/config.toml   Global config

Example:
  helpdesk-pilot "How do I reset my password?"
  helpdesk-pilot --chat
  helpdesk-pilot --chat --backend-url http://support.internal:8000/api
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Base URL of the support backend (overrides config)
    #[arg(long, value_name = "URL")]
    pub backend_url: Option<String>,

    /// Record the dialogue to a JSONL transcript file (overrides config)
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner and progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
