//! Paths used by the conversion prediction job.

use std::path::PathBuf;

use super::report::{GroupConfig, Secrets};
use crate::constants::DEFAULT_MODEL_FILES_PATH;
use crate::vars::{EnvVar, Group};

/// Artifact locations for conversion prediction.
#[derive(Debug, Clone)]
pub struct PredictionPaths {
    /// Directory holding trained models (`PATH_TO_MODEL_FILES`, default `models`).
    pub model_files: PathBuf,
    /// Directory of commerce CSV exports; commerce features are skipped when unset.
    pub commerce_csv_files: Option<PathBuf>,
}

impl Default for PredictionPaths {
    fn default() -> Self {
        Self {
            model_files: PathBuf::from(DEFAULT_MODEL_FILES_PATH),
            commerce_csv_files: None,
        }
    }
}

impl GroupConfig for PredictionPaths {
    const GROUP: Group = Group::Prediction;

    fn entries(&self, _secrets: Secrets) -> Vec<(EnvVar, String)> {
        let mut entries = vec![(
            EnvVar::PathToModelFiles,
            self.model_files.display().to_string(),
        )];
        if let Some(path) = &self.commerce_csv_files {
            entries.push((EnvVar::PathToCommerceCsvFiles, path.display().to_string()));
        }
        entries
    }
}
