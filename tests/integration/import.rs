//! Integration tests for `bzlcat import`.

use crate::{SAMPLE_CATALOG, write_catalog};
use assert_cmd::Command;
use predicates::prelude::*;

fn bzlcat() -> Command {
    Command::cargo_bin("bzlcat").expect("binary builds")
}

#[test]
fn import_resolves_literal_versions_to_refs() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);

    bzlcat()
        .args(["import", "--catalog"])
        .arg(&catalog)
        .arg("-")
        .write_stdin("androidx.core:core:1.13.1\n")
        .assert()
        .success()
        .stdout(
            "androidx-core-core = { group = \"androidx.core\", name = \"core\", version.ref = \"core\" }\n",
        );
}

#[test]
fn import_keeps_aar_classifier_and_literal_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);

    bzlcat()
        .args(["import", "--catalog"])
        .arg(&catalog)
        .arg("-")
        .write_stdin("net.java.dev.jna:jna:aar:5.99.0\n")
        .assert()
        .success()
        .stdout(
            "net-java-dev-jna-jna = { group = \"net.java.dev.jna\", name = \"jna:aar\", version = \"5.99.0\" }\n",
        );
}

#[test]
fn import_reads_coordinates_from_file_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);
    let coordinates = dir.path().join("artifacts.txt");
    std::fs::write(
        &coordinates,
        "# migrated from the legacy list\n\
         androidx.activity:activity:1.9.0\n\
         \n\
         androidx.compose.ui:ui\n",
    )
    .unwrap();

    let output = bzlcat()
        .args(["import", "--catalog"])
        .arg(&catalog)
        .arg(&coordinates)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("version.ref = \"activity\""));
    assert_eq!(
        lines[1],
        "androidx-compose-ui-ui = { group = \"androidx.compose.ui\", name = \"ui\" }"
    );
}

#[test]
fn import_fails_fast_on_malformed_coordinate() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);

    bzlcat()
        .args(["import", "--catalog"])
        .arg(&catalog)
        .arg("-")
        .write_stdin("androidx.core:core:1.13.1\njunit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed coordinate 'junit'"))
        .stdout(predicate::str::is_empty());
}
