//! Integration tests for the `check` command.

mod common;

use common::{configured_cmd, pythia_cmd};
use predicates::prelude::*;
use tempfile::NamedTempFile;

#[test]
fn test_check_succeeds_with_required_groups() {
    configured_cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Elasticsearch source"))
        .stdout(predicate::str::contains("CRM MySQL"))
        .stdout(predicate::str::contains("disabled"));
}

#[test]
fn test_check_empty_crm_is_disabled() {
    let output = configured_cmd()
        .env("CRM_DB_HOST", "")
        .env("CRM_DB_USER", "")
        .env("CRM_DB_PASS", "")
        .env("CRM_DB_DB", "")
        .args(["-o", "json", "check"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let crm = rows
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["group"] == "crm")
        .unwrap();
    assert_eq!(crm["status"]["state"], "disabled");
}

#[test]
fn test_check_missing_postgres_host() {
    configured_cmd()
        .env("POSTGRES_HOST", "")
        .arg("check")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("POSTGRES_HOST"))
        .stderr(predicate::str::contains("POSTGRES_USER").not());
}

#[test]
fn test_check_partial_crm_rejected() {
    configured_cmd()
        .env("CRM_DB_HOST", "localhost")
        .env("CRM_DB_USER", "")
        .arg("check")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("CRM_DB_USER"));
}

#[test]
fn test_check_partial_crm_disabled_by_flag() {
    configured_cmd()
        .env("CRM_DB_HOST", "localhost")
        .args(["--partial-groups", "disable", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"))
        .stderr(predicate::str::contains("partially set"));
}

#[test]
fn test_check_invalid_policy() {
    configured_cmd()
        .env("PYTHIA_PARTIAL_GROUPS", "ignore")
        .arg("check")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("reject"));
}

#[test]
fn test_check_strict_files() {
    let bigquery = |cmd: &mut assert_cmd::Command, path: &str| {
        cmd.env("GOOGLE_APPLICATION_CREDENTIALS", path)
            .env("BIGQUERY_PROJECT_ID", "pythia-prod")
            .env("BIGQUERY_DATASET_ID", "segments");
    };

    let mut cmd = configured_cmd();
    bigquery(&mut cmd, "/nonexistent/creds.json");
    cmd.args(["check", "--strict-files"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("GOOGLE_APPLICATION_CREDENTIALS"));

    let creds = NamedTempFile::new().unwrap();
    let mut cmd = configured_cmd();
    bigquery(&mut cmd, creds.path().to_str().unwrap());
    cmd.args(["check", "--strict-files"]).assert().success();
}

#[test]
fn test_check_without_any_config() {
    pythia_cmd()
        .arg("check")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("ELASTIC_ADDR"));
}
