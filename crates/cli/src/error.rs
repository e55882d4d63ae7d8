//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that deploy scripts can use to distinguish configuration failures.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 is left to clap for usage errors.
//! - Exit codes 3-6 are reserved for specific configuration failure categories.

use pythia_config::ConfigError;

/// Structured exit codes for pythia-segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Usage error - reported by clap before any command runs.
    #[allow(dead_code)]
    Usage = 2,

    /// A required group (Elasticsearch or the PostgreSQL warehouse) is incomplete.
    ///
    /// Scripts should set the variables named on stderr.
    MissingRequired = 3,

    /// An optional group is partially configured.
    ///
    /// Scripts should set the rest of the group, unset it, or pass `--partial-groups disable`.
    PartialOptional = 4,

    /// A variable is set but cannot be parsed.
    InvalidValue = 5,

    /// The `.env` file exists but cannot be read or parsed.
    DotenvFailed = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingRequired { .. } => ExitCode::MissingRequired,
            ConfigError::PartialOptional { .. } => ExitCode::PartialOptional,
            ConfigError::InvalidValue { .. } | ConfigError::InvalidPolicy(_) => {
                ExitCode::InvalidValue
            }
            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::DotenvFailed,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
