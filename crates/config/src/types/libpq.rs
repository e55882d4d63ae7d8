//! libpq-standard variables (`PGHOST`, `PGPORT`, ...).
//!
//! Responsibilities:
//! - Capture the variables PostgreSQL client tooling reads directly.
//! - Render them as a libpq keyword/value connection string.
//!
//! Does NOT handle:
//! - Filling in libpq defaults; unset keywords are left to libpq.
//! - Reconciling with `POSTGRES_*` (the two sets are independent).
//!
//! Invariants:
//! - `port`, when present, is between 1 and 65535.
//! - Conninfo values are quoted per libpq rules when they contain spaces, quotes or backslashes.

use secrecy::{ExposeSecret, SecretString};

use super::report::{GroupConfig, Secrets};
use crate::constants::REDACTED;
use crate::loader::ConfigError;
use crate::vars::{EnvVar, Group};

/// libpq environment, each field optional.
#[derive(Debug, Clone, Default)]
pub struct PgEnvConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<SecretString>,
    pub database: Option<String>,
}

impl PgEnvConfig {
    pub(crate) fn parse_port(raw: &str) -> Result<u16, ConfigError> {
        match raw.parse::<u16>() {
            Ok(0) | Err(_) => Err(ConfigError::invalid(
                EnvVar::PgPort,
                "must be a port number between 1 and 65535",
            )),
            Ok(port) => Ok(port),
        }
    }

    /// True when none of the `PG*` variables was set.
    pub fn is_empty(&self) -> bool {
        self.host.is_none()
            && self.port.is_none()
            && self.user.is_none()
            && self.password.is_none()
            && self.database.is_none()
    }

    /// Keyword/value connection string including the password.
    pub fn conninfo(&self) -> SecretString {
        let rendered = self.render(self.password.as_ref().map(|p| p.expose_secret()));
        SecretString::new(rendered.into())
    }

    /// Keyword/value connection string with the password replaced by `****`.
    pub fn redacted_conninfo(&self) -> String {
        self.render(self.password.as_ref().map(|_| REDACTED))
    }

    fn render(&self, password: Option<&str>) -> String {
        let port = self.port.map(|p| p.to_string());
        [
            ("host", self.host.as_deref()),
            ("port", port.as_deref()),
            ("user", self.user.as_deref()),
            ("password", password),
            ("dbname", self.database.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| format!("{key}={}", quote_conninfo(v))))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl GroupConfig for PgEnvConfig {
    const GROUP: Group = Group::Libpq;

    fn entries(&self, secrets: Secrets) -> Vec<(EnvVar, String)> {
        let mut entries = Vec::new();
        if let Some(host) = &self.host {
            entries.push((EnvVar::PgHost, host.clone()));
        }
        if let Some(port) = self.port {
            entries.push((EnvVar::PgPort, port.to_string()));
        }
        if let Some(user) = &self.user {
            entries.push((EnvVar::PgUser, user.clone()));
        }
        if let Some(password) = &self.password {
            entries.push((EnvVar::PgPassword, secrets.render(password)));
        }
        if let Some(database) = &self.database {
            entries.push((EnvVar::PgDatabase, database.clone()));
        }
        entries
    }
}

/// Quote a conninfo value when libpq would otherwise misread it.
fn quote_conninfo(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '\'' || c == '\\' || c == '=');
    if !needs_quotes {
        return value.to_string();
    }

    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(PgEnvConfig::parse_port("5432").unwrap(), 5432);
        assert!(PgEnvConfig::parse_port("0").is_err());
        assert!(PgEnvConfig::parse_port("65536").is_err());
        assert!(PgEnvConfig::parse_port("pg").is_err());
    }

    #[test]
    fn test_empty_config_renders_empty_conninfo() {
        let config = PgEnvConfig::default();
        assert!(config.is_empty());
        assert_eq!(config.redacted_conninfo(), "");
    }

    #[test]
    fn test_conninfo_quotes_and_redacts() {
        let config = PgEnvConfig {
            host: Some("localhost".to_string()),
            port: Some(5433),
            user: Some("pythia".to_string()),
            password: Some(SecretString::new("it's secret".into())),
            database: Some("segments db".to_string()),
        };
        assert_eq!(
            config.conninfo().expose_secret(),
            "host=localhost port=5433 user=pythia password='it\\'s secret' dbname='segments db'"
        );
        assert_eq!(
            config.redacted_conninfo(),
            "host=localhost port=5433 user=pythia password=**** dbname='segments db'"
        );
    }
}
