//! Configuration type definitions for the pythia-segments services.
//!
//! Responsibilities:
//! - Define one typed configuration per variable group.
//! - Define the root `Settings` and its redacted report.
//!
//! Does NOT handle:
//! - Configuration loading from the environment (see `loader` module).
//! - Opening connections to any backend.
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Typed configs are built from `GroupValues` via `TryFrom`, after presence rules passed.

mod bigquery;
mod crm;
mod elastic;
pub(crate) mod endpoint;
mod libpq;
mod prediction;
mod report;
mod settings;
mod warehouse;

pub use bigquery::BigQueryConfig;
pub use crm::CrmConfig;
pub use elastic::{BasicAuth, ElasticConfig};
pub use endpoint::HostPort;
pub use libpq::PgEnvConfig;
pub use prediction::PredictionPaths;
pub use report::{GroupConfig, GroupReport, GroupStatus, Secrets, SettingsReport};
pub use settings::{FeatureSwitches, Settings};
pub use warehouse::WarehouseConfig;
