//! Show command: print the loaded configuration.

use anyhow::Result;
use pythia_config::Secrets;

use super::check::terminated;
use crate::config_context::load_settings;
use crate::formatters::{OutputFormat, get_formatter};

/// Run the show command.
pub fn run(partial_groups: Option<&str>, show_secrets: bool, format: OutputFormat) -> Result<()> {
    let settings = load_settings(partial_groups)?;

    let secrets = if show_secrets {
        tracing::warn!("printing secrets in clear text");
        Secrets::Revealed
    } else {
        Secrets::Masked
    };

    let output = get_formatter(format).format_report(&settings.report(secrets))?;
    print!("{}", terminated(output));
    Ok(())
}
