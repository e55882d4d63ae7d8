//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Resolve the output format shared by every command.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `config_context`).
//!
//! Invariants:
//! - Commands are routed based on the top-level Commands enum variant.
//! - `vars` is the only command that runs without a valid configuration.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::formatters::OutputFormat;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let format = OutputFormat::from_str(&cli.output)?;
    let partial_groups = cli.partial_groups.as_deref();

    match cli.command {
        Commands::Check { strict_files } => {
            commands::check::run(partial_groups, strict_files, format)?;
        }
        Commands::Show { show_secrets } => {
            commands::show::run(partial_groups, show_secrets, format)?;
        }
        Commands::Vars => {
            commands::vars::run(format)?;
        }
        Commands::Features => {
            commands::features::run(partial_groups, format)?;
        }
        Commands::Dsn { target, redact } => {
            commands::dsn::run(partial_groups, target, redact)?;
        }
    }

    Ok(())
}
