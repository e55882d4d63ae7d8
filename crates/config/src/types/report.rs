//! Redacted, serializable view of loaded settings.
//!
//! Responsibilities:
//! - Describe each group's status (enabled, disabled, skipped) and values.
//! - Mask secrets unless the caller explicitly reveals them.
//!
//! Does NOT handle:
//! - Formatting reports as tables or JSON (see the CLI crate).
//!
//! Invariants:
//! - With `Secrets::Masked`, no secret value appears anywhere in a report.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::constants::REDACTED;
use crate::vars::{EnvVar, Group};

/// Whether secrets are masked in rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Secrets {
    #[default]
    Masked,
    Revealed,
}

impl Secrets {
    pub fn render(self, secret: &SecretString) -> String {
        match self {
            Secrets::Masked => REDACTED.to_string(),
            Secrets::Revealed => secret.expose_secret().to_string(),
        }
    }
}

/// A typed configuration group that can describe its values.
pub trait GroupConfig {
    const GROUP: Group;

    /// Values as they should appear in reports, keyed by the variable they came from.
    fn entries(&self, secrets: Secrets) -> Vec<(EnvVar, String)>;
}

/// Load outcome of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GroupStatus {
    /// The group is configured and in use.
    Enabled,
    /// No variable of the group was set.
    Disabled,
    /// The group was partially set and disabled by policy.
    Skipped { missing: Vec<EnvVar> },
}

impl GroupStatus {
    pub fn is_enabled(&self) -> bool {
        matches!(self, GroupStatus::Enabled)
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupStatus::Enabled => "enabled",
            GroupStatus::Disabled => "disabled",
            GroupStatus::Skipped { .. } => "skipped",
        }
    }
}

/// Report entry for one group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub group: Group,
    pub label: &'static str,
    pub status: GroupStatus,
    pub values: BTreeMap<EnvVar, String>,
}

impl GroupReport {
    pub(crate) fn new<C: GroupConfig>(
        config: Option<&C>,
        status: GroupStatus,
        secrets: Secrets,
    ) -> Self {
        let values = config
            .map(|c| c.entries(secrets).into_iter().collect())
            .unwrap_or_default();
        Self {
            group: C::GROUP,
            label: C::GROUP.label(),
            status,
            values,
        }
    }
}

/// Report covering every group, in `Group::ALL` order.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsReport {
    pub groups: Vec<GroupReport>,
}

impl SettingsReport {
    pub fn group(&self, group: Group) -> Option<&GroupReport> {
        self.groups.iter().find(|g| g.group == group)
    }
}
