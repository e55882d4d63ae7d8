//! pythia-segments - operator CLI for the pythia_segments configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Load `.env`, then load and validate the configuration groups from the environment.
//! - Format and display results in various output formats (table, JSON, YAML).
//!
//! Does NOT handle:
//! - Configuration parsing rules (see `crates/config`).
//! - Connecting to Elasticsearch, PostgreSQL, MySQL or BigQuery.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values reach the loader.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod formatters;

use args::{Cli, LogFormat};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use pythia_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::from(&e).as_i32());
    }

    let cli = Cli::parse();
    init_logging(cli.log_format);

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}
