//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load raw values from `.env` files, environment variables, and builder methods.
//! - Enforce each group's presence rule (required, all-or-nothing, lenient).
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Typed parsing of group values (see the `types` module).
//! - Opening connections to any backend.
//!
//! Invariants / Assumptions:
//! - Empty and whitespace-only values are treated exactly like unset variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;
mod group;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use group::{GroupValues, PartialGroupPolicy, load_optional_group, load_required_group};
