//! PostgreSQL warehouse configuration.
//!
//! The warehouse receives every aggregate the pipeline produces, so all four
//! `POSTGRES_*` variables are required.

use secrecy::{ExposeSecret, SecretString};

use super::endpoint::{HostPort, database_url, redact_url};
use super::report::{GroupConfig, Secrets};
use crate::constants::POSTGRES_SCHEME;
use crate::loader::{ConfigError, GroupValues};
use crate::vars::{EnvVar, Group};

/// Connection settings for the PostgreSQL warehouse.
#[derive(Debug, Clone)]
pub struct WarehouseConfig {
    pub host: HostPort,
    pub user: String,
    pub password: SecretString,
    pub database: String,
}

impl WarehouseConfig {
    /// `postgres://` connection URL including the password.
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
            POSTGRES_SCHEME,
            EnvVar::PostgresHost,
            &self.host,
            &self.user,
            self.password.expose_secret(),
            &self.database,
        )
    }
}

impl TryFrom<GroupValues> for WarehouseConfig {
    type Error = ConfigError;

    fn try_from(mut values: GroupValues) -> Result<Self, Self::Error> {
        let host = HostPort::parse(
            EnvVar::PostgresHost,
            &values.take_required(EnvVar::PostgresHost)?,
        )?;
        let config = Self {
            host,
            user: values.take_required(EnvVar::PostgresUser)?,
            password: SecretString::new(values.take_required(EnvVar::PostgresPass)?.into()),
            database: values.take_required(EnvVar::PostgresDb)?,
        };

        // The host must form a valid URL.
        config.url()?;
        Ok(config)
    }
}

impl GroupConfig for WarehouseConfig {
    const GROUP: Group = Group::Warehouse;

    fn entries(&self, secrets: Secrets) -> Vec<(EnvVar, String)> {
        vec![
            (EnvVar::PostgresHost, self.host.to_string()),
            (EnvVar::PostgresUser, self.user.clone()),
            (EnvVar::PostgresPass, secrets.render(&self.password)),
            (EnvVar::PostgresDb, self.database.clone()),
        ]
    }
}
