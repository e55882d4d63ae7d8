//! Check command: validate the configuration.
//!
//! Responsibilities:
//! - Load the configuration and fail with a structured exit code when invalid.
//! - Print every group's status (enabled, disabled, skipped).
//! - Optionally verify that the BigQuery credentials file exists.
//!
//! Does NOT handle:
//! - Connecting to any backend; a passing check says nothing about reachability.

use anyhow::Result;
use pythia_config::{ConfigError, EnvVar, Group, Settings};
use tracing::info;

use crate::config_context::load_settings;
use crate::formatters::{GroupStatusRow, OutputFormat, get_formatter};

/// Run the check command.
pub fn run(partial_groups: Option<&str>, strict_files: bool, format: OutputFormat) -> Result<()> {
    let settings = load_settings(partial_groups)?;

    if strict_files {
        check_files(&settings)?;
    }

    let rows = status_rows(&settings);
    info!(
        enabled = rows.iter().filter(|row| row.status.is_enabled()).count(),
        "configuration is valid"
    );

    let output = get_formatter(format).format_check(&rows)?;
    print!("{}", terminated(output));
    Ok(())
}

pub(crate) fn status_rows(settings: &Settings) -> Vec<GroupStatusRow> {
    Group::ALL
        .iter()
        .map(|&group| GroupStatusRow {
            group,
            label: group.label(),
            status: settings.status(group),
        })
        .collect()
}

fn check_files(settings: &Settings) -> Result<(), ConfigError> {
    let Some(bigquery) = &settings.bigquery else {
        return Ok(());
    };

    if !bigquery.credentials_path.is_file() {
        return Err(ConfigError::InvalidValue {
            var: EnvVar::GoogleApplicationCredentials.name().to_string(),
            message: format!(
                "credentials file {} does not exist",
                bigquery.credentials_path.display()
            ),
        });
    }

    Ok(())
}

/// Ensure output ends with exactly one newline.
pub(crate) fn terminated(mut output: String) -> String {
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}
