//! Root settings for the pythia-segments services.
//!
//! Responsibilities:
//! - Bundle every configuration group into one immutable value.
//! - Report per-group status and derive feature switches for downstream jobs.
//!
//! Does NOT handle:
//! - Reading or validating the environment (see `loader`).
//!
//! Invariants:
//! - Required groups are always present; optional groups are `None` when disabled.
//! - `skipped` only lists all-or-nothing groups disabled by `PartialGroupPolicy::Disable`.

use serde::Serialize;
use std::collections::BTreeMap;

use super::bigquery::BigQueryConfig;
use super::crm::CrmConfig;
use super::elastic::ElasticConfig;
use super::libpq::PgEnvConfig;
use super::prediction::PredictionPaths;
use super::report::{GroupReport, GroupStatus, Secrets, SettingsReport};
use super::warehouse::WarehouseConfig;
use crate::loader::{ConfigError, ConfigLoader};
use crate::vars::{EnvVar, Group};

/// Fully resolved configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub elastic: ElasticConfig,
    pub warehouse: WarehouseConfig,
    pub crm: Option<CrmConfig>,
    pub bigquery: Option<BigQueryConfig>,
    pub libpq: PgEnvConfig,
    pub prediction: PredictionPaths,
    pub(crate) skipped: BTreeMap<Group, Vec<EnvVar>>,
}

/// Optional pipeline features, derived from which groups are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureSwitches {
    /// Churn/renewal features and CRM data in `aggregate_user_pageviews`.
    pub crm_features: bool,
    /// Upload of aggregates to BigQuery.
    pub bigquery_export: bool,
    /// Commerce CSV features for conversion prediction.
    pub commerce_csv_features: bool,
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// Does not read `.env`; call `ConfigLoader::load_dotenv` first for that.
    pub fn load() -> Result<Self, ConfigError> {
        ConfigLoader::new().from_env()?.build()
    }

    pub fn status(&self, group: Group) -> GroupStatus {
        if let Some(missing) = self.skipped.get(&group) {
            return GroupStatus::Skipped {
                missing: missing.clone(),
            };
        }

        let enabled = match group {
            Group::Elastic | Group::Warehouse | Group::Prediction => true,
            Group::Crm => self.crm.is_some(),
            Group::BigQuery => self.bigquery.is_some(),
            Group::Libpq => !self.libpq.is_empty(),
        };

        if enabled {
            GroupStatus::Enabled
        } else {
            GroupStatus::Disabled
        }
    }

    pub fn features(&self) -> FeatureSwitches {
        FeatureSwitches {
            crm_features: self.crm.is_some(),
            bigquery_export: self.bigquery.is_some(),
            commerce_csv_features: self.prediction.commerce_csv_files.is_some(),
        }
    }

    /// Build a report of every group.
    pub fn report(&self, secrets: Secrets) -> SettingsReport {
        SettingsReport {
            groups: vec![
                GroupReport::new(Some(&self.elastic), self.status(Group::Elastic), secrets),
                GroupReport::new(Some(&self.warehouse), self.status(Group::Warehouse), secrets),
                GroupReport::new(self.crm.as_ref(), self.status(Group::Crm), secrets),
                GroupReport::new(self.bigquery.as_ref(), self.status(Group::BigQuery), secrets),
                GroupReport::new(Some(&self.libpq), self.status(Group::Libpq), secrets),
                GroupReport::new(Some(&self.prediction), self.status(Group::Prediction), secrets),
            ],
        }
    }
}
