//! Centralized constants for the pythia-segments workspace.
//!
//! This module contains default values and control variable names used
//! across crates to avoid magic string duplication.

// =============================================================================
// Loader Control
// =============================================================================

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Environment variable selecting how partially configured optional groups are handled.
pub const PARTIAL_GROUPS_VAR: &str = "PYTHIA_PARTIAL_GROUPS";

// =============================================================================
// Defaults
// =============================================================================

/// Scheme assumed for `ELASTIC_ADDR` values given as bare `host:port`.
pub const DEFAULT_ELASTIC_SCHEME: &str = "http";

/// Directory used for model artifacts when `PATH_TO_MODEL_FILES` is unset.
pub const DEFAULT_MODEL_FILES_PATH: &str = "models";

/// URL scheme of the PostgreSQL warehouse connection string.
pub const POSTGRES_SCHEME: &str = "postgres";

/// URL scheme of the CRM MySQL connection string.
pub const MYSQL_SCHEME: &str = "mysql";

// =============================================================================
// Display
// =============================================================================

/// Placeholder printed instead of secret values.
pub const REDACTED: &str = "****";
