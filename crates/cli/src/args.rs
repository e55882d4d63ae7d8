//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse global flags (partial group policy, log format, output format).
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read configuration variables; the loader reads them from the environment.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "pythia-segments")]
#[command(
    about = "Validate and inspect the pythia_segments configuration",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  pythia-segments check\n  pythia-segments --partial-groups disable show\n  pythia-segments -o json features\n  pythia-segments dsn warehouse --redact\n  psql \"$(pythia-segments dsn libpq)\"\n"
)]
pub struct Cli {
    /// How to handle partially configured optional groups (reject, disable).
    ///
    /// Defaults to PYTHIA_PARTIAL_GROUPS, then to reject.
    #[arg(long, global = true, value_name = "POLICY")]
    pub partial_groups: Option<String>,

    /// Log output format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Output format (table, json, yaml)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and validate the configuration, then print each group's status
    Check {
        /// Also require GOOGLE_APPLICATION_CREDENTIALS to point to an existing file
        #[arg(long)]
        strict_files: bool,
    },

    /// Print the loaded configuration with secrets masked
    Show {
        /// Print secrets in clear text
        #[arg(long)]
        show_secrets: bool,
    },

    /// List every known variable and whether it is set (values are never printed)
    Vars,

    /// Print the pipeline features enabled by the configuration
    Features,

    /// Print a connection string for a database group
    Dsn {
        /// Group to render
        #[arg(value_enum)]
        target: DsnTarget,

        /// Replace the password with ****
        #[arg(long)]
        redact: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DsnTarget {
    /// postgres:// URL built from POSTGRES_*
    Warehouse,
    /// mysql:// URL built from CRM_DB_*
    Crm,
    /// libpq keyword/value string built from PG*
    Libpq,
}
