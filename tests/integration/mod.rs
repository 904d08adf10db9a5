//! Integration test suite for bzlcat
//!
//! End-to-end tests driving the compiled binary through both transcoding
//! directions.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **emit**: catalog → maven.install block rendering
//! - **import**: coordinate list → catalog entry rendering

mod emit;
mod import;

use std::path::Path;

/// Write a catalog file into a temp directory and return its path.
pub fn write_catalog(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("libs.versions.toml");
    std::fs::write(&path, content).expect("failed to write test catalog");
    path
}

/// A small but representative catalog exercising every library form.
pub const SAMPLE_CATALOG: &str = r#"
[versions]
core = "1.13.1"
activity = "1.9.0"
compose_bom = "2024.05.00"

[libraries]
androidx-core = { group = "androidx.core", name = "core", version.ref = "core" }
androidx-activity = { module = "androidx.activity:activity", version.ref = "activity" }
compose-bom = { module = "androidx.compose:compose-bom", version.ref = "compose_bom" }
compose-ui = { module = "androidx.compose.ui:ui" }
jna = { module = "net.java.dev.jna:jna", version = "5.14.0" }
"#;
