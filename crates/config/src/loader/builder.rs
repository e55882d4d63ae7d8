//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` collecting raw variable values.
//! - Support loading from `.env`, environment variables, and direct builder methods.
//! - Build the final `Settings`, enforcing each group's presence rule.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Group presence rules themselves (delegated to group.rs).
//! - Typed parsing of values (delegated to the `types` module).
//!
//! Invariants / Assumptions:
//! - Builder methods called after `from_env()` take precedence over environment variables.
//! - Blank values are never stored; setting a blank value unsets the variable.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - `build()` fails on the first failing group, in `Group::ALL` order.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::env::apply_env;
use super::error::ConfigError;
use super::group::{PartialGroupPolicy, load_optional_group, load_required_group, missing_vars};
use crate::constants::DOTENV_DISABLED_VAR;
use crate::types::{
    BigQueryConfig, CrmConfig, ElasticConfig, PgEnvConfig, PredictionPaths, Settings,
    WarehouseConfig,
};
use crate::vars::{EnvVar, Group};
use secrecy::SecretString;

/// Configuration loader that builds settings from environment variables.
#[derive(Default)]
pub struct ConfigLoader {
    values: BTreeMap<EnvVar, String>,
    partial_policy: Option<PartialGroupPolicy>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set a variable's value, as if it came from the environment.
    ///
    /// The value is trimmed; a blank value unsets the variable.
    pub fn with_var(mut self, var: EnvVar, value: impl Into<String>) -> Self {
        let value = value.into();
        let trimmed = value.trim();
        let normalized = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self.set_value(var, normalized);
        self
    }

    /// Unset a variable.
    pub fn without_var(mut self, var: EnvVar) -> Self {
        self.set_value(var, None);
        self
    }

    /// Choose how partially configured optional groups are handled.
    pub fn with_partial_policy(mut self, policy: PartialGroupPolicy) -> Self {
        self.partial_policy = Some(policy);
        self
    }

    /// The effective partial group policy.
    pub fn partial_policy(&self) -> PartialGroupPolicy {
        self.partial_policy.unwrap_or_default()
    }

    /// Whether a non-blank value is present for `var`.
    pub fn is_set(&self, var: EnvVar) -> bool {
        self.values.contains_key(&var)
    }

    /// Build the final settings.
    pub fn build(self) -> Result<Settings, ConfigError> {
        let policy = self.partial_policy();
        let raw = &self.values;
        let mut skipped = BTreeMap::new();

        let elastic = ElasticConfig::try_from(load_required_group(Group::Elastic, raw)?)?;
        let warehouse = WarehouseConfig::try_from(load_required_group(Group::Warehouse, raw)?)?;

        let crm = match load_optional_group(Group::Crm, raw, policy)? {
            Some(values) => Some(CrmConfig::try_from(values)?),
            None => {
                Self::record_skipped(Group::Crm, raw, &mut skipped);
                None
            }
        };

        let bigquery = match load_optional_group(Group::BigQuery, raw, policy)? {
            Some(values) => Some(BigQueryConfig::try_from(values)?),
            None => {
                Self::record_skipped(Group::BigQuery, raw, &mut skipped);
                None
            }
        };

        let libpq = PgEnvConfig {
            host: raw.get(&EnvVar::PgHost).cloned(),
            port: raw
                .get(&EnvVar::PgPort)
                .map(|p| PgEnvConfig::parse_port(p))
                .transpose()?,
            user: raw.get(&EnvVar::PgUser).cloned(),
            password: raw
                .get(&EnvVar::PgPassword)
                .map(|p| SecretString::new(p.as_str().into())),
            database: raw.get(&EnvVar::PgDatabase).cloned(),
        };

        let mut prediction = PredictionPaths::default();
        if let Some(path) = raw.get(&EnvVar::PathToModelFiles) {
            prediction.model_files = PathBuf::from(path);
        }
        prediction.commerce_csv_files = raw.get(&EnvVar::PathToCommerceCsvFiles).map(PathBuf::from);

        tracing::info!(
            crm = crm.is_some(),
            bigquery = bigquery.is_some(),
            libpq = !libpq.is_empty(),
            "configuration loaded"
        );

        Ok(Settings {
            elastic,
            warehouse,
            crm,
            bigquery,
            libpq,
            prediction,
            skipped,
        })
    }

    /// Remember a group that had some values but was disabled by policy.
    fn record_skipped(
        group: Group,
        raw: &BTreeMap<EnvVar, String>,
        skipped: &mut BTreeMap<Group, Vec<EnvVar>>,
    ) {
        let missing = missing_vars(group, raw);
        if missing.len() < group.vars().len() {
            skipped.insert(group, missing);
        }
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn explicit_partial_policy(&self) -> Option<PartialGroupPolicy> {
        self.partial_policy
    }

    pub(crate) fn set_partial_policy(&mut self, policy: Option<PartialGroupPolicy>) {
        self.partial_policy = policy;
    }

    pub(crate) fn set_value(&mut self, var: EnvVar, value: Option<String>) {
        match value {
            Some(value) => {
                self.values.insert(var, value);
            }
            None => {
                self.values.remove(&var);
            }
        }
    }
}
