//! Configuration for the pythia_segments services.
//!
//! This crate reads the Elasticsearch, PostgreSQL warehouse, CRM MySQL,
//! BigQuery and libpq settings from environment variables (optionally seeded
//! from a `.env` file) and validates them once at startup.

pub mod constants;
mod loader;
pub mod types;
pub mod vars;

pub use loader::{
    ConfigError, ConfigLoader, GroupValues, PartialGroupPolicy, env_var_or_none,
    load_optional_group, load_required_group,
};
pub use types::{
    BasicAuth, BigQueryConfig, CrmConfig, ElasticConfig, FeatureSwitches, GroupConfig,
    GroupReport, GroupStatus, HostPort, PgEnvConfig, PredictionPaths, Secrets, Settings,
    SettingsReport, WarehouseConfig,
};
pub use vars::{EnvVar, Group, GroupRequirement, VarKind};
