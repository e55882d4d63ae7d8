//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read every known variable from the process environment into a ConfigLoader.
//! - Read the partial group policy from `PYTHIA_PARTIAL_GROUPS`.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Group validation or typed parsing (see group.rs and the `types` module).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Values already set through builder methods are only replaced by non-empty env values.
//! - A policy set through the builder is never replaced by the environment.

use super::builder::ConfigLoader;
use super::error::ConfigError;
use super::group::PartialGroupPolicy;
use crate::constants::PARTIAL_GROUPS_VAR;
use crate::vars::EnvVar;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    for var in EnvVar::ALL {
        if let Some(value) = env_var_or_none(var.name()) {
            loader.set_value(var, Some(value));
        }
    }

    if loader.explicit_partial_policy().is_none() {
        if let Some(raw) = env_var_or_none(PARTIAL_GROUPS_VAR) {
            loader.set_partial_policy(Some(raw.parse::<PartialGroupPolicy>()?));
        }
    }

    Ok(())
}
