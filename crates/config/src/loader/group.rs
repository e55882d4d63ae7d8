//! Group-level presence rules.
//!
//! Responsibilities:
//! - Decide whether a required group is complete (`load_required_group`).
//! - Decide whether an all-or-nothing group is enabled, absent, or partial (`load_optional_group`).
//! - Apply the configured `PartialGroupPolicy` to partial groups.
//!
//! Does NOT handle:
//! - Parsing individual values into typed configuration (see `types`).
//! - Reading the environment (see env.rs).
//!
//! Invariants:
//! - Raw value maps only hold non-empty, trimmed values; absence means "unset".
//! - Error variants list variables in `Group::vars()` order.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;
use crate::constants::REDACTED;
use crate::vars::{EnvVar, Group};

/// What to do with an all-or-nothing group that is only partially configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartialGroupPolicy {
    /// Abort loading with `ConfigError::PartialOptional`.
    #[default]
    Reject,
    /// Treat the group as disabled and log a warning.
    Disable,
}

impl FromStr for PartialGroupPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(PartialGroupPolicy::Reject),
            "disable" => Ok(PartialGroupPolicy::Disable),
            _ => Err(ConfigError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for PartialGroupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PartialGroupPolicy::Reject => "reject",
            PartialGroupPolicy::Disable => "disable",
        })
    }
}

/// Raw values of a single group that passed its presence rule.
pub struct GroupValues {
    group: Group,
    values: BTreeMap<EnvVar, String>,
}

impl fmt::Debug for GroupValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (var, value) in &self.values {
            if var.is_secret() {
                map.entry(&var.name(), &REDACTED);
            } else {
                map.entry(&var.name(), value);
            }
        }
        map.finish()
    }
}

impl GroupValues {
    fn collect(group: Group, raw: &BTreeMap<EnvVar, String>) -> Self {
        let values = group
            .vars()
            .iter()
            .filter_map(|var| raw.get(var).map(|value| (*var, value.clone())))
            .collect();
        Self { group, values }
    }

    pub fn group(&self) -> Group {
        self.group
    }

    /// Remove and return an optional value.
    pub fn take(&mut self, var: EnvVar) -> Option<String> {
        self.values.remove(&var)
    }

    /// Remove and return a value the presence rule guaranteed.
    pub fn take_required(&mut self, var: EnvVar) -> Result<String, ConfigError> {
        self.values
            .remove(&var)
            .ok_or_else(|| ConfigError::MissingRequired {
                group: self.group,
                vars: vec![var],
            })
    }
}

/// Load a required group, failing if any of its required variables is unset.
pub fn load_required_group(
    group: Group,
    raw: &BTreeMap<EnvVar, String>,
) -> Result<GroupValues, ConfigError> {
    let missing: Vec<EnvVar> = group
        .required_vars()
        .iter()
        .copied()
        .filter(|var| !raw.contains_key(var))
        .collect();

    if !missing.is_empty() {
        return Err(ConfigError::MissingRequired {
            group,
            vars: missing,
        });
    }

    tracing::debug!(group = %group, "required configuration group resolved");
    Ok(GroupValues::collect(group, raw))
}

/// Load an all-or-nothing group.
///
/// Returns `Ok(None)` when every variable is unset, `Ok(Some(_))` when every
/// variable is set, and applies `policy` when only some are.
pub fn load_optional_group(
    group: Group,
    raw: &BTreeMap<EnvVar, String>,
    policy: PartialGroupPolicy,
) -> Result<Option<GroupValues>, ConfigError> {
    let (set, missing): (Vec<EnvVar>, Vec<EnvVar>) =
        group.vars().iter().copied().partition(|var| raw.contains_key(var));

    if set.is_empty() {
        tracing::debug!(group = %group, "optional configuration group disabled");
        return Ok(None);
    }

    if missing.is_empty() {
        tracing::debug!(group = %group, "optional configuration group enabled");
        return Ok(Some(GroupValues::collect(group, raw)));
    }

    match policy {
        PartialGroupPolicy::Reject => Err(ConfigError::PartialOptional {
            group,
            set,
            missing,
        }),
        PartialGroupPolicy::Disable => {
            tracing::warn!(
                group = %group,
                missing = ?missing.iter().map(|v| v.name()).collect::<Vec<_>>(),
                "optional configuration group is partially set; treating it as disabled"
            );
            Ok(None)
        }
    }
}

/// Variables of `group` that are unset in `raw`.
pub(crate) fn missing_vars(group: Group, raw: &BTreeMap<EnvVar, String>) -> Vec<EnvVar> {
    group
        .vars()
        .iter()
        .copied()
        .filter(|var| !raw.contains_key(var))
        .collect()
}
