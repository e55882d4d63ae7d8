//! BigQuery export configuration.

use std::path::PathBuf;

use super::report::{GroupConfig, Secrets};
use crate::loader::{ConfigError, GroupValues};
use crate::vars::{EnvVar, Group};

/// Settings for exporting aggregates to BigQuery.
///
/// The credentials file is not opened here; `credentials_path` is handed to the
/// Google client libraries as-is.
#[derive(Debug, Clone)]
pub struct BigQueryConfig {
    pub credentials_path: PathBuf,
    pub project_id: String,
    pub dataset_id: String,
}

impl BigQueryConfig {
    /// Fully qualified `project.dataset` reference.
    pub fn dataset_ref(&self) -> String {
        format!("{}.{}", self.project_id, self.dataset_id)
    }

    /// Fully qualified `project.dataset.table` reference.
    pub fn table_id(&self, table: &str) -> String {
        format!("{}.{}.{}", self.project_id, self.dataset_id, table)
    }
}

impl TryFrom<GroupValues> for BigQueryConfig {
    type Error = ConfigError;

    fn try_from(mut values: GroupValues) -> Result<Self, Self::Error> {
        let credentials_path =
            PathBuf::from(values.take_required(EnvVar::GoogleApplicationCredentials)?);

        let project_id = values.take_required(EnvVar::BigqueryProjectId)?;
        if project_id.chars().any(char::is_whitespace) {
            return Err(ConfigError::invalid(
                EnvVar::BigqueryProjectId,
                "must not contain whitespace",
            ));
        }

        let dataset_id = values.take_required(EnvVar::BigqueryDatasetId)?;
        if !dataset_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ConfigError::invalid(
                EnvVar::BigqueryDatasetId,
                "may only contain letters, digits and underscores",
            ));
        }

        Ok(Self {
            credentials_path,
            project_id,
            dataset_id,
        })
    }
}

impl GroupConfig for BigQueryConfig {
    const GROUP: Group = Group::BigQuery;

    fn entries(&self, _secrets: Secrets) -> Vec<(EnvVar, String)> {
        vec![
            (
                EnvVar::GoogleApplicationCredentials,
                self.credentials_path.display().to_string(),
            ),
            (EnvVar::BigqueryProjectId, self.project_id.clone()),
            (EnvVar::BigqueryDatasetId, self.dataset_id.clone()),
        ]
    }
}
