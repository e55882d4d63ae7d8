//! Vars command: list every known variable.
//!
//! Responsibilities:
//! - Show each variable's group, presence rule and whether it is set.
//!
//! Does NOT handle:
//! - Validation; this command succeeds even when the configuration would not load.
//! - The partial group policy; neither `--partial-groups` nor `PYTHIA_PARTIAL_GROUPS` is parsed.
//!
//! Invariants:
//! - Variable values are never printed.

use anyhow::Result;
use pythia_config::EnvVar;

use super::check::terminated;
use crate::config_context::env_only_loader;
use crate::formatters::{OutputFormat, VarRow, get_formatter};

/// Run the vars command.
pub fn run(format: OutputFormat) -> Result<()> {
    let loader = env_only_loader()?;

    let rows: Vec<VarRow> = EnvVar::ALL
        .iter()
        .map(|&var| VarRow {
            name: var,
            group: var.group(),
            kind: var.kind(),
            secret: var.is_secret(),
            set: loader.is_set(var),
        })
        .collect();

    let output = get_formatter(format).format_vars(&rows)?;
    print!("{}", terminated(output));
    Ok(())
}
