//! Reverse transcoding: flat coordinates → version catalog entries.
//!
//! The migration direction: hand-written artifact lists are converted into
//! `[libraries]` lines for pasting into the catalog. Per coordinate, in
//! input order:
//!
//! 1. a catalog key is derived from `group-name` with `':'` and `'.'`
//!    normalized to `'-'`;
//! 2. a literal version is matched back against the version table by
//!    *value*; the first key in table order whose value equals the literal
//!    becomes the `version.ref`, the literal is the fallback;
//! 3. one TOML inline-table line is rendered, e.g.
//!    `androidx-core-core = { group = "androidx.core", name = "core", version.ref = "core" }`.
//!
//! Duplicate derived keys and ambiguous version values resolve silently
//! (last-writer / first-match wins downstream) but are surfaced here as
//! `tracing` warnings so a migration run can spot them.

use crate::coordinate::{Coordinate, VersionValue};
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::warn;

/// Derive a catalog key from a coordinate's group and name.
///
/// Catalog keys cannot contain `':'` or `'.'`, so both are normalized to
/// `'-'`. Distinct coordinates can collapse onto the same key; the caller
/// is warned but the collision is not an error.
#[must_use]
pub fn catalog_key(group: &str, name: &str) -> String {
    format!("{group}-{name}").replace([':', '.'], "-")
}

/// Find the version-table key whose value equals `literal`.
///
/// First match in table order wins; a second key holding the same value is
/// reported as ambiguous but does not change the outcome. Deterministic
/// because the table preserves document order.
fn resolve_version_ref<'a>(
    versions: &'a IndexMap<String, String>,
    literal: &str,
) -> Option<&'a str> {
    let mut matches = versions.iter().filter(|(_, value)| value.as_str() == literal);
    let (first, _) = matches.next()?;
    if let Some((second, _)) = matches.next() {
        warn!(
            version = literal,
            chosen = first.as_str(),
            also = second.as_str(),
            "ambiguous version value; first key in table order wins"
        );
    }
    Some(first)
}

/// Render one catalog-entry line per coordinate, in input order.
///
/// No aggregation or merging happens across lines; the output is meant for
/// manual copy into the catalog document.
#[must_use]
pub fn transcode(coordinates: &[Coordinate], versions: &IndexMap<String, String>) -> Vec<String> {
    let mut seen_keys = HashSet::new();
    coordinates
        .iter()
        .map(|coordinate| {
            let key = catalog_key(&coordinate.group, &coordinate.name);
            if !seen_keys.insert(key.clone()) {
                warn!(key = key.as_str(), "duplicate catalog key; the last entry wins downstream");
            }
            render_entry(&key, coordinate, versions)
        })
        .collect()
}

fn render_entry(
    key: &str,
    coordinate: &Coordinate,
    versions: &IndexMap<String, String>,
) -> String {
    let name = match &coordinate.classifier {
        Some(classifier) => format!("{}:{}", coordinate.name, classifier),
        None => coordinate.name.clone(),
    };

    let version = match &coordinate.version {
        Some(VersionValue::Literal(literal)) => match resolve_version_ref(versions, literal) {
            Some(reference) => format!(", version.ref = \"{reference}\""),
            None => format!(", version = \"{literal}\""),
        },
        // Already-symbolic versions keep their reference untouched.
        Some(VersionValue::Ref(reference)) => format!(", version.ref = \"{reference}\""),
        None => String::new(),
    };

    format!("{key} = {{ group = \"{}\", name = \"{name}\"{version} }}", coordinate.group)
}
