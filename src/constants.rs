//! Global constants used throughout the bzlcat codebase.
//!
//! These values mirror the fixed configuration of the consuming Bazel
//! workspace. Defining them centrally keeps the transcoder core pure:
//! callers pass them in explicitly and the CLI supplies the defaults.

/// The single coordinate treated as a bill of materials.
///
/// A library whose canonical `group:name` equals this value is emitted into
/// the `maven_boms` list instead of `maven_artifacts`. The Compose BOM pins
/// transitive version alignment for the whole Compose artifact family, which
/// is why its member artifacts carry no version of their own in the catalog.
pub const COMPOSE_BOM_COORDINATE: &str = "androidx.compose:compose-bom";

/// The only classifier recognized in flat coordinate strings.
///
/// `rules_jvm_external` encodes the Android archive packaging type as a
/// third coordinate segment (`group:name:aar:version`). Any other third
/// segment is a version, never a classifier.
pub const AAR_CLASSIFIER: &str = "aar";

/// Where Gradle conventionally keeps the version catalog.
pub const DEFAULT_CATALOG_PATH: &str = "gradle/libs.versions.toml";
