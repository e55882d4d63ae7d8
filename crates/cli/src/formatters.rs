//! Output formatters for CLI commands.
//!
//! Provides multiple output formats: Table, JSON, and YAML.

use anyhow::Result;
use pythia_config::{EnvVar, FeatureSwitches, Group, GroupStatus, SettingsReport, VarKind};
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => anyhow::bail!(
                "Invalid output format: {}. Valid options: table, json, yaml",
                s
            ),
        }
    }
}

/// Status line of one group, as printed by `check`.
#[derive(Debug, Clone, Serialize)]
pub struct GroupStatusRow {
    pub group: Group,
    pub label: &'static str,
    pub status: GroupStatus,
}

/// One known variable, as printed by `vars`.
#[derive(Debug, Clone, Serialize)]
pub struct VarRow {
    pub name: EnvVar,
    pub group: Group,
    pub kind: VarKind,
    pub secret: bool,
    pub set: bool,
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format per-group load status.
    fn format_check(&self, rows: &[GroupStatusRow]) -> Result<String>;

    /// Format the settings report.
    fn format_report(&self, report: &SettingsReport) -> Result<String>;

    /// Format the variable listing.
    fn format_vars(&self, rows: &[VarRow]) -> Result<String>;

    /// Format feature switches.
    fn format_features(&self, features: &FeatureSwitches) -> Result<String>;
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_check(&self, rows: &[GroupStatusRow]) -> Result<String> {
        Ok(serde_json::to_string_pretty(rows)?)
    }

    fn format_report(&self, report: &SettingsReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_vars(&self, rows: &[VarRow]) -> Result<String> {
        Ok(serde_json::to_string_pretty(rows)?)
    }

    fn format_features(&self, features: &FeatureSwitches) -> Result<String> {
        Ok(serde_json::to_string_pretty(features)?)
    }
}

/// YAML formatter.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_check(&self, rows: &[GroupStatusRow]) -> Result<String> {
        Ok(serde_yaml::to_string(rows)?)
    }

    fn format_report(&self, report: &SettingsReport) -> Result<String> {
        Ok(serde_yaml::to_string(report)?)
    }

    fn format_vars(&self, rows: &[VarRow]) -> Result<String> {
        Ok(serde_yaml::to_string(rows)?)
    }

    fn format_features(&self, features: &FeatureSwitches) -> Result<String> {
        Ok(serde_yaml::to_string(features)?)
    }
}

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_check(&self, rows: &[GroupStatusRow]) -> Result<String> {
        let table: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                vec![
                    row.label.to_string(),
                    row.status.label().to_string(),
                    status_detail(&row.status),
                ]
            })
            .collect();
        Ok(render_table(&["GROUP", "STATUS", "DETAIL"], &table))
    }

    fn format_report(&self, report: &SettingsReport) -> Result<String> {
        let mut output = String::new();
        for group in &report.groups {
            output.push_str(&format!("{} [{}]\n", group.label, group.status.label()));
            if let GroupStatus::Skipped { .. } = group.status {
                output.push_str(&format!("  {}\n", status_detail(&group.status)));
            }
            let width = group
                .values
                .keys()
                .map(|var| var.name().len())
                .max()
                .unwrap_or(0);
            for (var, value) in &group.values {
                output.push_str(&format!("  {:<width$}  {}\n", var.name(), value));
            }
        }
        Ok(output)
    }

    fn format_vars(&self, rows: &[VarRow]) -> Result<String> {
        let table: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                vec![
                    row.name.to_string(),
                    row.group.label().to_string(),
                    row.kind.to_string(),
                    if row.set { "yes" } else { "no" }.to_string(),
                ]
            })
            .collect();
        Ok(render_table(&["VARIABLE", "GROUP", "KIND", "SET"], &table))
    }

    fn format_features(&self, features: &FeatureSwitches) -> Result<String> {
        let on_off = |enabled: bool| if enabled { "on" } else { "off" }.to_string();
        let table = vec![
            vec!["crm_features".to_string(), on_off(features.crm_features)],
            vec!["bigquery_export".to_string(), on_off(features.bigquery_export)],
            vec![
                "commerce_csv_features".to_string(),
                on_off(features.commerce_csv_features),
            ],
        ];
        Ok(render_table(&["FEATURE", "STATE"], &table))
    }
}

/// Get a formatter for the given output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}

fn status_detail(status: &GroupStatus) -> String {
    match status {
        GroupStatus::Skipped { missing } => format!(
            "missing {}",
            missing
                .iter()
                .map(|var| var.name())
                .collect::<Vec<_>>()
                .join(", ")
        ),
        _ => String::new(),
    }
}

/// Render rows under a header with space-padded columns.
fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let format_row = |cells: Vec<&str>| -> String {
        let line = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ");
        format!("{}\n", line.trim_end())
    };

    let mut output = format_row(header.to_vec());
    for row in rows {
        output.push_str(&format_row(row.iter().map(String::as_str).collect()));
    }
    output
}
