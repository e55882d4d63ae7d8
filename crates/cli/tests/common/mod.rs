//! Shared test utilities for pythia-segments integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide a minimal valid environment for commands that need one.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Every known configuration variable is cleared unless a test sets it.

use assert_cmd::Command;

use pythia_config::EnvVar;

/// Loader and logging controls cleared alongside the configuration variables.
const CONTROL_VARS: &[&str] = &["PYTHIA_PARTIAL_GROUPS", "RUST_LOG"];

/// Returns a hermetic `pythia-segments` command with no configuration set.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Every configuration variable is cleared to ensure no leakage from the host.
pub fn pythia_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pythia-segments");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for var in EnvVar::ALL {
        cmd.env_remove(var.name());
    }
    for var in CONTROL_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a hermetic command with the required groups configured.
#[allow(dead_code)]
pub fn configured_cmd() -> Command {
    let mut cmd = pythia_cmd();
    cmd.env("ELASTIC_ADDR", "localhost:9200")
        .env("ELASTIC_AUTH", "elastic:es-secret")
        .env("ELASTIC_PREFIX", "prod_")
        .env("POSTGRES_HOST", "localhost:5432")
        .env("POSTGRES_USER", "pythia")
        .env("POSTGRES_PASS", "pg-secret")
        .env("POSTGRES_DB", "segments");
    cmd
}
