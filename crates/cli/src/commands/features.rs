//! Features command: print which optional pipeline features are enabled.

use anyhow::Result;

use super::check::terminated;
use crate::config_context::load_settings;
use crate::formatters::{OutputFormat, get_formatter};

/// Run the features command.
pub fn run(partial_groups: Option<&str>, format: OutputFormat) -> Result<()> {
    let settings = load_settings(partial_groups)?;
    let output = get_formatter(format).format_features(&settings.features())?;
    print!("{}", terminated(output));
    Ok(())
}
