//! Bidirectional transcoding between catalogs and maven coordinate lists.
//!
//! The two directions never run together; they are separate entry points
//! sharing the data model:
//!
//! - [`forward`] - catalog → rendered `maven.install(...)` block for `MODULE.bazel`
//! - [`reverse`] - flat coordinate list + version table → catalog-entry lines
//!
//! Rendering helpers live here because both directions emit ordered,
//! comma-joined, quoted sequences. Quoting is mandatory throughout: no raw
//! identifiers ever reach the generated text.

pub mod forward;
pub mod reverse;

use indexmap::IndexMap;

/// Render an ordered sequence as a Starlark list literal.
///
/// Items arrive already quoted/rendered; this indents and joins them.
/// An empty sequence renders as `[]`, never an error.
fn render_list(items: &[String]) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    let joined =
        items.iter().map(|item| format!("    {item}")).collect::<Vec<_>>().join(",\n");
    format!("[\n{joined}\n]")
}

/// Render the version table as a Starlark `dict(...)` literal with quoted
/// values, in table order.
fn render_versions(versions: &IndexMap<String, String>) -> String {
    if versions.is_empty() {
        return "dict()".to_string();
    }
    let joined = versions
        .iter()
        .map(|(key, value)| format!("    {key} = \"{value}\""))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("dict(\n{joined}\n)")
}
