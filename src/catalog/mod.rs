//! Gradle version catalog parsing and validation.
//!
//! A version catalog (`gradle/libs.versions.toml`) declares named version
//! strings and library entries that reference them:
//!
//! ```toml
//! [versions]
//! core = "1.13.1"
//! compose-bom = "2024.05.00"
//!
//! [libraries]
//! androidx-core = { group = "androidx.core", name = "core", version.ref = "core" }
//! compose-bom = { module = "androidx.compose:compose-bom", version.ref = "compose-bom" }
//! compose-ui = { module = "androidx.compose.ui:ui" }
//! ```
//!
//! Both tables are held in [`IndexMap`]s so the document's insertion order
//! survives into the generated output, which keeps emitted files
//! reproducible across runs. Loading validates every entry up front: a
//! library with neither `module` nor `group`+`name` and a `version.ref`
//! that is absent from `[versions]` are both hard errors. Other catalog
//! sections (`[bundles]`, `[plugins]`) are ignored.

use crate::core::BzlcatError;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// An in-memory Gradle version catalog.
///
/// Constructed fresh per invocation via [`Catalog::load`] and read-only
/// thereafter; nothing persists across runs beyond the emitted text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    /// Named version strings, in document order.
    #[serde(default)]
    pub versions: IndexMap<String, String>,

    /// Library declarations, in document order.
    #[serde(default)]
    pub libraries: IndexMap<String, LibraryEntry>,
}

/// One `[libraries]` declaration.
///
/// Exactly one coordinate form must be present: either the combined
/// `module = "group:name"` or separate `group` and `name` keys. When both
/// appear, `module` wins. The version is optional; version-less libraries
/// are BOM-managed and render as a bare `group:name`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LibraryEntry {
    /// Combined `group:name` coordinates.
    pub module: Option<String>,

    /// Group half of the split coordinate form.
    pub group: Option<String>,

    /// Name half of the split coordinate form.
    pub name: Option<String>,

    /// Optional version, symbolic or literal.
    pub version: Option<VersionField>,
}

/// A library's version declaration.
///
/// Gradle allows both an inline literal (`version = "1.2.3"`) and a
/// symbolic reference into the `[versions]` table (`version.ref = "key"`).
/// The distinction is preserved all the way to rendering: a reference
/// becomes a build-time lookup expression, a literal is baked into the
/// emitted coordinate string.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum VersionField {
    /// `version = "1.2.3"` - inlined into the rendered coordinate.
    Literal(String),
    /// `version.ref = "key"` - resolved against the version table at build time.
    Reference {
        /// The key into the `[versions]` table.
        #[serde(rename = "ref")]
        reference: String,
    },
}

impl LibraryEntry {
    /// Resolve this entry's canonical `group:name` coordinates.
    ///
    /// `key` is the library's catalog key, used only for error context.
    pub fn module_coordinates(&self, key: &str) -> Result<String, BzlcatError> {
        if let Some(module) = &self.module {
            return Ok(module.clone());
        }
        match (&self.group, &self.name) {
            (Some(group), Some(name)) => Ok(format!("{group}:{name}")),
            _ => Err(BzlcatError::LibraryInvalid {
                library: key.to_string(),
                reason: "either `module` or both `group` and `name` are required".to_string(),
            }),
        }
    }

    /// The version-table key this entry references, if its version is symbolic.
    #[must_use]
    pub fn version_ref(&self) -> Option<&str> {
        match &self.version {
            Some(VersionField::Reference { reference }) => Some(reference),
            _ => None,
        }
    }
}

impl Catalog {
    /// Load and validate a version catalog from a TOML file.
    ///
    /// The whole operation is atomic: either a fully-validated catalog is
    /// returned or an error is, with nothing half-parsed escaping. After
    /// deserialization every library is checked for a resolvable coordinate
    /// form, and every `version.ref` is checked against the `[versions]`
    /// table. An unresolved reference is a hard error here rather than a
    /// silent "no version" downstream.
    ///
    /// # Errors
    ///
    /// - [`BzlcatError::CatalogNotFound`] if `path` does not exist
    /// - [`BzlcatError::CatalogParseError`] for TOML syntax or schema problems
    /// - [`BzlcatError::LibraryInvalid`] for entries missing coordinates
    /// - [`BzlcatError::UnresolvedVersionRef`] for dangling version references
    pub fn load(path: &Path) -> Result<Self, BzlcatError> {
        if !path.exists() {
            return Err(BzlcatError::CatalogNotFound { path: path.display().to_string() });
        }

        let content = std::fs::read_to_string(path)?;
        let catalog: Self =
            toml::from_str(&content).map_err(|e| BzlcatError::CatalogParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a catalog from an in-memory TOML string.
    pub fn parse(content: &str) -> Result<Self, BzlcatError> {
        let catalog: Self = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), BzlcatError> {
        for (key, library) in &self.libraries {
            library.module_coordinates(key)?;

            if let Some(reference) = library.version_ref() {
                if !self.versions.contains_key(reference) {
                    return Err(BzlcatError::UnresolvedVersionRef {
                        library: key.clone(),
                        reference: reference.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
