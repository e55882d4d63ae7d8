//! Catalogue of the environment variables read by the loader.
//!
//! Responsibilities:
//! - Name every variable the pythia-segments services read, exactly as operators set them.
//! - Assign each variable to a configuration group and mark secrets.
//! - Describe how strictly each group is enforced (required, all-or-nothing, lenient).
//!
//! Does NOT handle:
//! - Reading the process environment (see `loader::env`).
//! - Turning raw values into typed configuration (see `types`).
//!
//! Invariants:
//! - `EnvVar::ALL` lists every variant exactly once, grouped in `Group::ALL` order.
//! - `Group::vars()` and `EnvVar::group()` agree with each other.

use serde::{Serialize, Serializer};
use std::fmt;

/// A configuration variable known to the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnvVar {
    ElasticAddr,
    ElasticAuth,
    ElasticPrefix,
    PostgresHost,
    PostgresUser,
    PostgresPass,
    PostgresDb,
    CrmDbHost,
    CrmDbUser,
    CrmDbPass,
    CrmDbDb,
    GoogleApplicationCredentials,
    BigqueryProjectId,
    BigqueryDatasetId,
    PgHost,
    PgPort,
    PgUser,
    PgPassword,
    PgDatabase,
    PathToModelFiles,
    PathToCommerceCsvFiles,
}

impl EnvVar {
    /// Every known variable, in group order.
    pub const ALL: [EnvVar; 21] = [
        EnvVar::ElasticAddr,
        EnvVar::ElasticAuth,
        EnvVar::ElasticPrefix,
        EnvVar::PostgresHost,
        EnvVar::PostgresUser,
        EnvVar::PostgresPass,
        EnvVar::PostgresDb,
        EnvVar::CrmDbHost,
        EnvVar::CrmDbUser,
        EnvVar::CrmDbPass,
        EnvVar::CrmDbDb,
        EnvVar::GoogleApplicationCredentials,
        EnvVar::BigqueryProjectId,
        EnvVar::BigqueryDatasetId,
        EnvVar::PgHost,
        EnvVar::PgPort,
        EnvVar::PgUser,
        EnvVar::PgPassword,
        EnvVar::PgDatabase,
        EnvVar::PathToModelFiles,
        EnvVar::PathToCommerceCsvFiles,
    ];

    /// The environment variable name.
    pub const fn name(self) -> &'static str {
        match self {
            EnvVar::ElasticAddr => "ELASTIC_ADDR",
            EnvVar::ElasticAuth => "ELASTIC_AUTH",
            EnvVar::ElasticPrefix => "ELASTIC_PREFIX",
            EnvVar::PostgresHost => "POSTGRES_HOST",
            EnvVar::PostgresUser => "POSTGRES_USER",
            EnvVar::PostgresPass => "POSTGRES_PASS",
            EnvVar::PostgresDb => "POSTGRES_DB",
            EnvVar::CrmDbHost => "CRM_DB_HOST",
            EnvVar::CrmDbUser => "CRM_DB_USER",
            EnvVar::CrmDbPass => "CRM_DB_PASS",
            EnvVar::CrmDbDb => "CRM_DB_DB",
            EnvVar::GoogleApplicationCredentials => "GOOGLE_APPLICATION_CREDENTIALS",
            EnvVar::BigqueryProjectId => "BIGQUERY_PROJECT_ID",
            EnvVar::BigqueryDatasetId => "BIGQUERY_DATASET_ID",
            EnvVar::PgHost => "PGHOST",
            EnvVar::PgPort => "PGPORT",
            EnvVar::PgUser => "PGUSER",
            EnvVar::PgPassword => "PGPASSWORD",
            EnvVar::PgDatabase => "PGDATABASE",
            EnvVar::PathToModelFiles => "PATH_TO_MODEL_FILES",
            EnvVar::PathToCommerceCsvFiles => "PATH_TO_COMMERCE_CSV_FILES",
        }
    }

    /// The group this variable belongs to.
    pub const fn group(self) -> Group {
        match self {
            EnvVar::ElasticAddr | EnvVar::ElasticAuth | EnvVar::ElasticPrefix => Group::Elastic,
            EnvVar::PostgresHost
            | EnvVar::PostgresUser
            | EnvVar::PostgresPass
            | EnvVar::PostgresDb => Group::Warehouse,
            EnvVar::CrmDbHost | EnvVar::CrmDbUser | EnvVar::CrmDbPass | EnvVar::CrmDbDb => {
                Group::Crm
            }
            EnvVar::GoogleApplicationCredentials
            | EnvVar::BigqueryProjectId
            | EnvVar::BigqueryDatasetId => Group::BigQuery,
            EnvVar::PgHost
            | EnvVar::PgPort
            | EnvVar::PgUser
            | EnvVar::PgPassword
            | EnvVar::PgDatabase => Group::Libpq,
            EnvVar::PathToModelFiles | EnvVar::PathToCommerceCsvFiles => Group::Prediction,
        }
    }

    /// Whether the value must never be printed or logged.
    pub const fn is_secret(self) -> bool {
        matches!(
            self,
            EnvVar::ElasticAuth | EnvVar::PostgresPass | EnvVar::CrmDbPass | EnvVar::PgPassword
        )
    }

    /// How the loader treats this variable when it is unset.
    pub fn kind(self) -> VarKind {
        let group = self.group();
        match group.requirement() {
            GroupRequirement::Required if group.required_vars().contains(&self) => {
                VarKind::Required
            }
            GroupRequirement::AllOrNothing => VarKind::AllOrNothing,
            _ => VarKind::Optional,
        }
    }

    /// Look up a variable by its environment name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|var| var.name() == name)
    }
}

impl fmt::Display for EnvVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for EnvVar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// How an unset variable is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VarKind {
    /// Startup fails without it.
    Required,
    /// Must be set together with the rest of its group, or not at all.
    AllOrNothing,
    /// May be left unset.
    Optional,
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VarKind::Required => "required",
            VarKind::AllOrNothing => "all-or-nothing",
            VarKind::Optional => "optional",
        })
    }
}

/// A group of variables describing one backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    /// Elasticsearch pageview source.
    Elastic,
    /// PostgreSQL warehouse receiving aggregates.
    Warehouse,
    /// CRM MySQL database (churn/renewal features).
    Crm,
    /// BigQuery export target.
    BigQuery,
    /// libpq-standard variables used by PostgreSQL client tooling.
    Libpq,
    /// Conversion prediction artifact paths.
    Prediction,
}

/// Enforcement level of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRequirement {
    /// Every required variable must be set.
    Required,
    /// Either every variable is set or none is.
    AllOrNothing,
    /// Each variable is optional on its own.
    Lenient,
}

impl Group {
    pub const ALL: [Group; 6] = [
        Group::Elastic,
        Group::Warehouse,
        Group::Crm,
        Group::BigQuery,
        Group::Libpq,
        Group::Prediction,
    ];

    /// Human-readable label used in errors and reports.
    pub const fn label(self) -> &'static str {
        match self {
            Group::Elastic => "Elasticsearch source",
            Group::Warehouse => "PostgreSQL warehouse",
            Group::Crm => "CRM MySQL",
            Group::BigQuery => "BigQuery",
            Group::Libpq => "libpq",
            Group::Prediction => "prediction paths",
        }
    }

    pub const fn requirement(self) -> GroupRequirement {
        match self {
            Group::Elastic | Group::Warehouse => GroupRequirement::Required,
            Group::Crm | Group::BigQuery => GroupRequirement::AllOrNothing,
            Group::Libpq | Group::Prediction => GroupRequirement::Lenient,
        }
    }

    /// Every variable of the group.
    pub const fn vars(self) -> &'static [EnvVar] {
        match self {
            Group::Elastic => &[
                EnvVar::ElasticAddr,
                EnvVar::ElasticAuth,
                EnvVar::ElasticPrefix,
            ],
            Group::Warehouse => &[
                EnvVar::PostgresHost,
                EnvVar::PostgresUser,
                EnvVar::PostgresPass,
                EnvVar::PostgresDb,
            ],
            Group::Crm => &[
                EnvVar::CrmDbHost,
                EnvVar::CrmDbUser,
                EnvVar::CrmDbPass,
                EnvVar::CrmDbDb,
            ],
            Group::BigQuery => &[
                EnvVar::GoogleApplicationCredentials,
                EnvVar::BigqueryProjectId,
                EnvVar::BigqueryDatasetId,
            ],
            Group::Libpq => &[
                EnvVar::PgHost,
                EnvVar::PgPort,
                EnvVar::PgUser,
                EnvVar::PgPassword,
                EnvVar::PgDatabase,
            ],
            Group::Prediction => &[EnvVar::PathToModelFiles, EnvVar::PathToCommerceCsvFiles],
        }
    }

    /// Variables that must be present for the group to be usable.
    ///
    /// `ELASTIC_AUTH` and `ELASTIC_PREFIX` are optional members of a required group.
    pub const fn required_vars(self) -> &'static [EnvVar] {
        match self {
            Group::Elastic => &[EnvVar::ElasticAddr],
            Group::Warehouse | Group::Crm | Group::BigQuery => self.vars(),
            Group::Libpq | Group::Prediction => &[],
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vars_belong_to_their_group_listing() {
        for var in EnvVar::ALL {
            assert!(
                var.group().vars().contains(&var),
                "{} missing from {:?}.vars()",
                var,
                var.group()
            );
        }
        let grouped: usize = Group::ALL.iter().map(|g| g.vars().len()).sum();
        assert_eq!(grouped, EnvVar::ALL.len());
    }

    #[test]
    fn test_from_name_round_trips() {
        for var in EnvVar::ALL {
            assert_eq!(EnvVar::from_name(var.name()), Some(var));
        }
        assert_eq!(EnvVar::from_name("ELASTIC_ADDRESS"), None);
    }

    #[test]
    fn test_var_kinds() {
        assert_eq!(EnvVar::ElasticAddr.kind(), VarKind::Required);
        assert_eq!(EnvVar::ElasticAuth.kind(), VarKind::Optional);
        assert_eq!(EnvVar::PostgresPass.kind(), VarKind::Required);
        assert_eq!(EnvVar::CrmDbUser.kind(), VarKind::AllOrNothing);
        assert_eq!(EnvVar::BigqueryDatasetId.kind(), VarKind::AllOrNothing);
        assert_eq!(EnvVar::PgPort.kind(), VarKind::Optional);
    }

    #[test]
    fn test_only_passwords_are_secret() {
        let secrets: Vec<_> = EnvVar::ALL.into_iter().filter(|v| v.is_secret()).collect();
        assert_eq!(
            secrets,
            vec![
                EnvVar::ElasticAuth,
                EnvVar::PostgresPass,
                EnvVar::CrmDbPass,
                EnvVar::PgPassword
            ]
        );
    }

    #[test]
    fn test_env_var_serializes_as_name() {
        let json = serde_json::to_string(&EnvVar::CrmDbDb).unwrap();
        assert_eq!(json, "\"CRM_DB_DB\"");
    }
}
