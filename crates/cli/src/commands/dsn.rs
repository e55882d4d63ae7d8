//! Dsn command: print a connection string for downstream tooling.
//!
//! Responsibilities:
//! - Render the warehouse or CRM URL, or the libpq conninfo string.
//! - Fail when the requested group is not configured.
//!
//! Invariants:
//! - Output is a single line regardless of `--output`, so it can be used in `$(...)`.
//! - With `--redact` the password is replaced by `****`.

use anyhow::{Result, anyhow};
use pythia_config::{Group, Settings};
use secrecy::ExposeSecret;

use crate::args::DsnTarget;
use crate::config_context::load_settings;

/// Run the dsn command.
pub fn run(partial_groups: Option<&str>, target: DsnTarget, redact: bool) -> Result<()> {
    let settings = load_settings(partial_groups)?;
    println!("{}", render(&settings, target, redact)?);
    Ok(())
}

fn render(settings: &Settings, target: DsnTarget, redact: bool) -> Result<String> {
    match target {
        DsnTarget::Warehouse => {
            let warehouse = &settings.warehouse;
            if redact {
                Ok(warehouse.redacted_url()?)
            } else {
                Ok(warehouse.connection_url()?.expose_secret().to_string())
            }
        }
        DsnTarget::Crm => {
            let crm = settings.crm.as_ref().ok_or_else(|| disabled(Group::Crm))?;
            if redact {
                Ok(crm.redacted_url()?)
            } else {
                Ok(crm.connection_url()?.expose_secret().to_string())
            }
        }
        DsnTarget::Libpq => {
            if settings.libpq.is_empty() {
                return Err(disabled(Group::Libpq));
            }
            if redact {
                Ok(settings.libpq.redacted_conninfo())
            } else {
                Ok(settings.libpq.conninfo().expose_secret().to_string())
            }
        }
    }
}

fn disabled(group: Group) -> anyhow::Error {
    let vars = group
        .vars()
        .iter()
        .map(|var| var.name())
        .collect::<Vec<_>>()
        .join(", ");
    anyhow!("{} is not configured; set {}", group, vars)
}
