//! CRM MySQL source configuration.
//!
//! Responsibilities:
//! - Hold the connection settings of the CRM database used for churn/renewal features.
//! - Build the `mysql://` connection URL handed to downstream jobs.
//!
//! Does NOT handle:
//! - Deciding whether the group is enabled (see `loader::group`).
//!
//! Invariants:
//! - A `CrmConfig` only exists when all four `CRM_DB_*` variables were set.

use secrecy::{ExposeSecret, SecretString};

use super::endpoint::{HostPort, database_url, redact_url};
use super::report::{GroupConfig, Secrets};
use crate::constants::MYSQL_SCHEME;
use crate::loader::{ConfigError, GroupValues};
use crate::vars::{EnvVar, Group};

/// Connection settings for the CRM MySQL database.
#[derive(Debug, Clone)]
pub struct CrmConfig {
    pub host: HostPort,
    pub user: String,
    pub password: SecretString,
    pub database: String,
}

impl CrmConfig {
    /// `mysql://` connection URL including the password.
    pub fn connection_url(&self) -> Result<SecretString, ConfigError> {
        let url = self.url()?;
        Ok(SecretString::new(url.to_string().into()))
    }

    /// Connection URL with the password replaced by `****`.
    pub fn redacted_url(&self) -> Result<String, ConfigError> {
        Ok(redact_url(&self.url()?))
    }

    fn url(&self) -> Result<url::Url, ConfigError> {
        database_url(
            MYSQL_SCHEME,
            EnvVar::CrmDbHost,
            &self.host,
            &self.user,
            self.password.expose_secret(),
            &self.database,
        )
    }
}

impl TryFrom<GroupValues> for CrmConfig {
    type Error = ConfigError;

    fn try_from(mut values: GroupValues) -> Result<Self, Self::Error> {
        let host = HostPort::parse(EnvVar::CrmDbHost, &values.take_required(EnvVar::CrmDbHost)?)?;
        let config = Self {
            host,
            user: values.take_required(EnvVar::CrmDbUser)?,
            password: SecretString::new(values.take_required(EnvVar::CrmDbPass)?.into()),
            database: values.take_required(EnvVar::CrmDbDb)?,
        };
        config.url()?;
        Ok(config)
    }
}

impl GroupConfig for CrmConfig {
    const GROUP: Group = Group::Crm;

    fn entries(&self, secrets: Secrets) -> Vec<(EnvVar, String)> {
        vec![
            (EnvVar::CrmDbHost, self.host.to_string()),
            (EnvVar::CrmDbUser, self.user.clone()),
            (EnvVar::CrmDbPass, secrets.render(&self.password)),
            (EnvVar::CrmDbDb, self.database.clone()),
        ]
    }
}
