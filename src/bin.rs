//! Binary entry point for `homework-bot`.
//!
//! This module provides the command-line interface for homework-bot with options
//! for configuration file paths, the log file and logging verbosity. It initializes
//! logging, loads the configuration and starts the poll loop.

use std::path::PathBuf;

use clap::Parser;
use homework_bot::base::{config::Config, logging, types::Void};
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Homework-bot – Practicum homework status notifications in Telegram.
///
/// Secrets come from the environment (or a `.env` file): `PRACTICUM_TOKEN`,
/// `TELEGRAM_TOKEN` and `TELEGRAM_CHAT_ID`. Everything else may also be set
/// in `config.toml`.
#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None)]
struct Args {
    /// Override the config file path (optional).
    ///
    /// By default, the bot will look for a config file at `.hidden/config.toml`
    /// in the current directory.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Log file; recreated on every start.
    #[arg(long, env = "LOG_FILE", default_value = "main.log")]
    log_file: PathBuf,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: INFO level
    /// - -v: DEBUG level
    /// - -vv or more: TRACE level
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Main entry point for the homework-bot binary.
///
/// Sets up logging based on verbosity, loads configuration, and starts the bot.
/// Returning an error exits the process with status 1.
#[tokio::main]
async fn main() -> Void {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Construct the level filter.

    let level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Prepare the log layer, teed to stdout and the log file.

    let (writer, file_error) = logging::log_writer(&args.log_file);

    let log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry().with(filter).with(log).init();

    if let Some(e) = file_error {
        warn!("Unable to open log file {}, logging to stdout only: {}", args.log_file.display(), e);
    }

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!(critical = true, "Unable to start: {}", e);
            return Err(e.into());
        }
    };

    homework_bot::start(config).await
}
