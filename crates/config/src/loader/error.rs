//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Name the offending variables so operators can fix the environment.
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see the CLI crate).
//!
//! Invariants:
//! - Error messages name variables, never their values.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

use crate::vars::{EnvVar, Group};

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required group is missing one or more variables.
    #[error("Missing required configuration for {group}: {} must be set", join_vars(.vars))]
    MissingRequired { group: Group, vars: Vec<EnvVar> },

    /// An all-or-nothing group is only partially configured.
    #[error(
        "Partial configuration for optional group {group}: {} set but {} missing. Set all of them or none",
        join_vars(.set),
        join_vars(.missing)
    )]
    PartialOptional {
        group: Group,
        set: Vec<EnvVar>,
        missing: Vec<EnvVar>,
    },

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Invalid partial group policy '{0}'. Valid values are 'reject' or 'disable'")]
    InvalidPolicy(String),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Shorthand for an `InvalidValue` error on a known variable.
    pub(crate) fn invalid(var: EnvVar, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            var: var.name().to_string(),
            message: message.into(),
        }
    }

    /// Variables that caused the error, if it concerns specific variables.
    pub fn offending_vars(&self) -> Vec<&str> {
        match self {
            ConfigError::MissingRequired { vars, .. } => vars.iter().map(|v| v.name()).collect(),
            ConfigError::PartialOptional { missing, .. } => {
                missing.iter().map(|v| v.name()).collect()
            }
            ConfigError::InvalidValue { var, .. } => vec![var.as_str()],
            _ => Vec::new(),
        }
    }
}

fn join_vars(vars: &[EnvVar]) -> String {
    vars.iter()
        .map(|v| v.name())
        .collect::<Vec<_>>()
        .join(", ")
}
