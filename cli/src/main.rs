//! CLI entrypoint for Helpdesk Pilot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use pilot_application::{DialogueController, TranscriptLogger};
use pilot_domain::Sender;
use pilot_infrastructure::{AppConfig, ConfigLoader, HttpAnswerGateway, JsonlTranscriptLogger};
use pilot_presentation::{ChatRepl, Cli, ConsoleFormatter};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Chat mode logs to a file so diagnostics don't interleave with the
    // prompt; one-shot mode logs to stderr. The guard must outlive main.
    let _log_guard: Option<WorkerGuard> = if cli.chat {
        init_file_logging(filter)
    } else {
        init_stderr_logging(filter);
        None
    };

    info!("Starting Helpdesk Pilot");

    if cli.show_config {
        print_config_locations();
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    // CLI flags override file configuration
    if let Some(url) = &cli.backend_url {
        config.backend.base_url = url.clone();
    }

    // === Dependency Injection ===
    // Create the infrastructure adapter for the ask endpoint
    let gateway = Arc::new(
        HttpAnswerGateway::new(
            &config.backend.base_url,
            Duration::from_secs(config.backend.timeout_seconds),
        )
        .context("failed to build the backend HTTP client")?,
    );

    let transcript = transcript_logger(&cli, &config);

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(gateway)
            .with_progress(!cli.quiet && config.repl.show_progress)
            .with_history_file(config.repl.history_file.as_ref().map(PathBuf::from));
        if let Some(logger) = transcript {
            repl = repl.with_transcript_logger(logger);
        }

        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    let mut controller = DialogueController::new(gateway);
    if let Some(logger) = transcript {
        controller.set_transcript_logger(logger);
    }

    let before = controller.log().len();
    controller.submit_text(&question).await;

    // Print what the dispatch appended; --quiet keeps only the raw answer
    for message in &controller.log()[before..] {
        if cli.quiet {
            if message.sender == Sender::Bot {
                println!("{}", message.content);
            }
        } else {
            println!("{}", ConsoleFormatter::format_message(message));
        }
    }

    Ok(())
}

fn init_stderr_logging(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Route diagnostics to a daily-rolled file under the platform data dir.
/// Falls back to stderr when no data dir is available.
fn init_file_logging(filter: EnvFilter) -> Option<WorkerGuard> {
    match dirs::data_dir() {
        Some(base) => {
            let appender = tracing_appender::rolling::daily(base.join("helpdesk-pilot"), "helpdesk-pilot.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            init_stderr_logging(filter);
            None
        }
    }
}

fn print_config_locations() {
    println!("Configuration file locations (highest priority first):");
    println!("  --config <path>");
    println!("  ./helpdesk.toml or ./.helpdesk.toml");
    match ConfigLoader::global_config_path() {
        Some(path) => println!("  {} (present)", path.display()),
        None => println!("  ~/.config/helpdesk-pilot/config.toml (absent)"),
    }
}

/// Build the transcript logger from the CLI flag or config, if any.
fn transcript_logger(cli: &Cli, config: &AppConfig) -> Option<Arc<dyn TranscriptLogger>> {
    let path = cli
        .transcript
        .clone()
        .or_else(|| config.transcript.path.as_ref().map(PathBuf::from))?;

    match JsonlTranscriptLogger::new(&path) {
        Some(logger) => {
            info!("Recording transcript to {}", path.display());
            Some(Arc::new(logger))
        }
        None => {
            eprintln!("Warning: could not open transcript file {}", path.display());
            None
        }
    }
}
