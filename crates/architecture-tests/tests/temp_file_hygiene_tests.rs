//! Purpose: Enforce deterministic temp file cleanup patterns in tests.
//!
//! Ensures all temp file creation uses the tempfile crate's RAII types
//! rather than std::env::temp_dir() with manual cleanup.
//!
//! Invariants:
//! - No test uses std::env::temp_dir() or hardcoded /tmp paths
//! - tempfile instances are bound to a named variable

mod common;

use std::fs;

use common::{crate_sources, display_path};

fn test_sources() -> Vec<(String, String)> {
    crate_sources()
        .into_iter()
        .filter_map(|path| {
            let content = fs::read_to_string(&path).ok()?;
            content
                .contains("#[test]")
                .then(|| (display_path(&path), content))
        })
        .collect()
}

#[test]
fn test_no_manual_temp_dir_usage() {
    let mut violations = Vec::new();

    for (path, content) in test_sources() {
        if content.contains("std::env::temp_dir()") {
            violations.push(format!(
                "{}: uses std::env::temp_dir() - prefer tempfile::tempdir() for RAII cleanup",
                path
            ));
        }
        if content.contains("\"/tmp") {
            violations.push(format!(
                "{}: contains hardcoded /tmp path - prefer tempfile crate",
                path
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "Found manual temp file patterns (not panic-safe):\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_tempfile_bindings_retained() {
    let mut violations = Vec::new();

    for (path, content) in test_sources() {
        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("let _ = tempfile::")
                || trimmed.starts_with("let _ = TempDir::new()")
                || trimmed.starts_with("let _ = NamedTempFile")
            {
                violations.push(format!(
                    "{}:{}: tempfile instance bound to `_` - use a named variable for RAII cleanup",
                    path,
                    i + 1
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Found tempfile instances not properly retained:\n{}",
        violations.join("\n")
    );
}
