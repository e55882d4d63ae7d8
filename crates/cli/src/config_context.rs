//! Configuration loading for command execution.
//!
//! Responsibilities:
//! - Apply CLI flags to a `ConfigLoader` on top of the environment.
//! - Load validated `Settings` for commands that need them.
//!
//! Does NOT handle:
//! - `.env` loading (done in `main()` before clap parsing).
//! - CLI argument definitions (see `args` module).
//!
//! Invariants:
//! - A `--partial-groups` flag takes precedence over `PYTHIA_PARTIAL_GROUPS`.
//! - Blank/whitespace-only flag values are ignored to allow fallback to the env var.

use anyhow::{Context, Result};
use pythia_config::{ConfigLoader, PartialGroupPolicy, Settings};

/// Build a loader from the environment with CLI overrides applied.
pub(crate) fn loader(partial_groups: Option<&str>) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();

    if let Some(raw) = partial_groups.filter(|raw| !raw.trim().is_empty()) {
        let policy: PartialGroupPolicy = raw.parse()?;
        loader = loader.with_partial_policy(policy);
    }

    loader
        .from_env()
        .context("Failed to load configuration from environment")
}

/// Read the environment without interpreting the partial group policy.
///
/// For commands that only inspect which variables are set.
pub(crate) fn env_only_loader() -> Result<ConfigLoader> {
    ConfigLoader::new()
        .with_partial_policy(PartialGroupPolicy::default())
        .from_env()
        .context("Failed to read configuration variables")
}

/// Load and validate the full configuration.
pub(crate) fn load_settings(partial_groups: Option<&str>) -> Result<Settings> {
    let settings = loader(partial_groups)?
        .build()
        .context("Invalid configuration")?;
    Ok(settings)
}
