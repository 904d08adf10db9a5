//! Integration tests for `bzlcat emit`.

use crate::{SAMPLE_CATALOG, write_catalog};
use assert_cmd::Command;
use predicates::prelude::*;

fn bzlcat() -> Command {
    Command::cargo_bin("bzlcat").expect("binary builds")
}

#[test]
fn emit_renders_complete_module_block() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);

    bzlcat()
        .args(["emit", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "maven = use_extension(\"@rules_jvm_external//:extensions.bzl\", \"maven\")",
        ))
        .stdout(predicate::str::contains("core = \"1.13.1\""))
        .stdout(predicate::str::contains(
            "\"androidx.core:core:{}\".format(maven_versions[\"core\"])",
        ))
        .stdout(predicate::str::contains("\"androidx.compose.ui:ui\""))
        .stdout(predicate::str::contains("\"net.java.dev.jna:jna:5.14.0\""))
        .stdout(predicate::str::contains("use_repo(maven, \"maven_deps\")"));
}

#[test]
fn emit_routes_bom_separately_from_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);

    let output = bzlcat().args(["emit", "--catalog"]).arg(&catalog).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let artifacts = stdout
        .split("maven_artifacts = ")
        .nth(1)
        .unwrap()
        .split("maven_boms = ")
        .next()
        .unwrap();
    let boms = stdout.split("maven_boms = ").nth(1).unwrap();

    assert!(!artifacts.contains("androidx.compose:compose-bom"));
    assert!(boms.contains("\"androidx.compose:compose-bom:{}\".format(maven_versions[\"compose_bom\"])"));
}

#[test]
fn emit_writes_output_file_atomically() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path(), SAMPLE_CATALOG);
    let output = dir.path().join("maven.MODULE.bazel");

    bzlcat().args(["emit", "--catalog"]).arg(&catalog).arg("-o").arg(&output).assert().success();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("maven_versions = dict("));
    assert!(written.ends_with("use_repo(maven, \"maven_deps\")"));
}

#[test]
fn emit_empty_catalog_produces_empty_lists() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path(), "[versions]\n\n[libraries]\n");

    bzlcat()
        .args(["emit", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("maven_artifacts = []"))
        .stdout(predicate::str::contains("maven_boms = []"));
}

#[test]
fn emit_fails_on_unresolved_version_ref() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(
        dir.path(),
        "[versions]\ncore = \"1.13.1\"\n\n[libraries]\nlib = { module = \"a:b\", version.ref = \"typo\" }\n",
    );

    bzlcat()
        .args(["emit", "--catalog"])
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Version reference 'typo'"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn emit_fails_on_missing_catalog() {
    bzlcat()
        .args(["emit", "--catalog", "/nonexistent/libs.versions.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Version catalog not found"));
}

#[test]
fn emit_honors_custom_bom_coordinate() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(
        dir.path(),
        "[versions]\nplatform = \"1.0\"\n\n[libraries]\nplatform = { module = \"my.org:platform-bom\", version.ref = \"platform\" }\n",
    );

    let output = bzlcat()
        .args(["emit", "--bom-coordinate", "my.org:platform-bom", "--catalog"])
        .arg(&catalog)
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let boms = stdout.split("maven_boms = ").nth(1).unwrap();
    assert!(boms.contains("my.org:platform-bom"));
}
