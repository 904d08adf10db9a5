//! Forward transcoding: version catalog → `rules_jvm_external` install block.
//!
//! Each library becomes one rendered coordinate string. A `version.ref`
//! renders as a deferred lookup expression,
//!
//! ```text
//! "androidx.core:core:{}".format(maven_versions["core"])
//! ```
//!
//! so the generated file re-reads the version table at Bazel evaluation
//! time rather than baking the value at generation time; a literal version
//! is inlined; a version-less library renders bare. Coordinates whose
//! canonical `group:name` equals the BOM sentinel go into the `maven_boms`
//! list, everything else into `maven_artifacts`, both in catalog order.
//!
//! Rendering is atomic: the full document string is built in memory and
//! only then handed to the caller for output, so a failure can never leave
//! a partially-written block behind.

use super::{render_list, render_versions};
use crate::catalog::{Catalog, VersionField};
use crate::core::BzlcatError;
use indexmap::IndexMap;

/// The fixed `MODULE.bazel` fragment the rendered blocks substitute into.
///
/// Repositories, resolver, and lock-file path are deliberate constants of
/// the consuming workspace, not parameters.
const MODULE_TEMPLATE: &str = r#"maven_versions = @VERSIONS@
maven_artifacts = @ARTIFACTS@
maven_boms = @BOMS@


maven = use_extension("@rules_jvm_external//:extensions.bzl", "maven")
maven.install(
    name = "maven_deps",
    artifacts = maven_artifacts,
    boms = maven_boms,
    fail_if_repin_required = True,
    lock_file = "//:manifest_install.json",
    repositories = [
        "https://maven.google.com",
        "https://repo1.maven.org/maven2",
    ],
    resolver = "maven",
    use_starlark_android_rules = True,
    aar_import_bzl_label = "@rules_android//android:rules.bzl",
)
use_repo(maven, "maven_deps")"#;

/// The transcoded form of a catalog, ready to render.
///
/// `artifacts` and `boms` hold fully-rendered coordinate expressions
/// (quoted strings or `.format(...)` lookups), each in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenInstall {
    /// The literal version table, in catalog order.
    pub versions: IndexMap<String, String>,
    /// Rendered ordinary artifact expressions.
    pub artifacts: Vec<String>,
    /// Rendered bill-of-materials expressions.
    pub boms: Vec<String>,
}

impl MavenInstall {
    /// Render the complete `MODULE.bazel` fragment.
    #[must_use]
    pub fn render(&self) -> String {
        MODULE_TEMPLATE
            .replace("@VERSIONS@", &render_versions(&self.versions))
            .replace("@ARTIFACTS@", &render_list(&self.artifacts))
            .replace("@BOMS@", &render_list(&self.boms))
    }
}

/// Transcode a catalog into artifact and BOM lists.
///
/// `bom_coordinate` is the canonical `group:name` whose libraries are
/// routed into the BOM list; passing it explicitly keeps this function
/// pure. Catalog iteration order is preserved within each partition so the
/// generated file is reproducible.
///
/// # Errors
///
/// - [`BzlcatError::LibraryInvalid`] if a library has no coordinate form
/// - [`BzlcatError::UnresolvedVersionRef`] if a `version.ref` is absent
///   from the version table (already caught at catalog load; re-checked
///   here so the transcoder is safe on hand-built catalogs too)
pub fn transcode(catalog: &Catalog, bom_coordinate: &str) -> Result<MavenInstall, BzlcatError> {
    let mut artifacts = Vec::new();
    let mut boms = Vec::new();

    for (key, library) in &catalog.libraries {
        let module = library.module_coordinates(key)?;

        let rendered = match &library.version {
            Some(VersionField::Reference { reference }) => {
                if !catalog.versions.contains_key(reference) {
                    return Err(BzlcatError::UnresolvedVersionRef {
                        library: key.clone(),
                        reference: reference.clone(),
                    });
                }
                format!("\"{module}:{{}}\".format(maven_versions[\"{reference}\"])")
            }
            Some(VersionField::Literal(version)) => format!("\"{module}:{version}\""),
            None => format!("\"{module}\""),
        };

        if module == bom_coordinate {
            boms.push(rendered);
        } else {
            artifacts.push(rendered);
        }
    }

    Ok(MavenInstall { versions: catalog.versions.clone(), artifacts, boms })
}
