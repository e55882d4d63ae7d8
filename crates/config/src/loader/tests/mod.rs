//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test builder methods and their precedence over environment variables.
//! - Test required, all-or-nothing and lenient groups end to end.
//! - Test `.env` loading and the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (tested in env.rs).
//! - Typed parsing of single groups (tested next to each type).
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Every env-driven test starts from an environment with all known variables unset.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::constants::{DOTENV_DISABLED_VAR, PARTIAL_GROUPS_VAR};
use crate::vars::EnvVar;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Run `f` with every known variable unset except `vars`.
pub fn with_clean_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let mut overrides: BTreeMap<String, Option<String>> = EnvVar::ALL
        .iter()
        .map(|var| (var.name().to_string(), None))
        .collect();
    overrides.insert(PARTIAL_GROUPS_VAR.to_string(), None);
    overrides.insert(DOTENV_DISABLED_VAR.to_string(), Some("1".to_string()));
    for (key, value) in vars {
        overrides.insert(key.to_string(), Some(value.to_string()));
    }
    temp_env::with_vars(overrides.into_iter().collect::<Vec<_>>(), f)
}

/// The smallest environment that loads successfully.
pub const MINIMAL_ENV: &[(&str, &str)] = &[
    ("ELASTIC_ADDR", "localhost:9200"),
    ("POSTGRES_HOST", "localhost"),
    ("POSTGRES_USER", "pythia"),
    ("POSTGRES_PASS", "s3cret"),
    ("POSTGRES_DB", "segments"),
];
