//! Maven coordinate parsing and rendering.
//!
//! A flat coordinate string uses `':'`-delimited segments:
//!
//! ```text
//! group:name[:classifier][:version]
//! ```
//!
//! The classifier slot is only ever the `aar` packaging marker; any other
//! third segment is a version. This makes the grammar order-sensitive, so
//! parsing consumes the segment sequence step by step with named fields
//! instead of indexing into a split vector:
//!
//! - `androidx.core:core:1.13.1` → version `1.13.1`, no classifier
//! - `net.java.dev.jna:jna:aar:5.14.0` → classifier `aar`, version `5.14.0`
//! - `androidx.compose.ui:ui` → version-less (BOM-managed)
//!
//! Trailing segments beyond the recognized ones are ignored with a warning,
//! mirroring the permissive behavior of the consuming resolver.

use crate::constants::AAR_CLASSIFIER;
use crate::core::BzlcatError;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// A version attached to a coordinate.
///
/// The two variants keep generation-time and build-time evaluation apart:
/// a [`Literal`](VersionValue::Literal) is baked into the rendered
/// coordinate string, a [`Ref`](VersionValue::Ref) renders as a deferred
/// lookup against the emitted version table so the consuming build re-reads
/// it at resolution time. Renderers match on the variant and can never
/// conflate the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionValue {
    /// A concrete version string, e.g. `1.13.1`.
    Literal(String),
    /// A symbolic key into the version table.
    Ref(String),
}

/// The universal unit flowing through both transcoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    /// Maven group, e.g. `androidx.core`. Never empty.
    pub group: String,
    /// Artifact name, e.g. `core`. Never empty.
    pub name: String,
    /// Packaging classifier; only `aar` is ever recognized.
    pub classifier: Option<String>,
    /// Version, literal or symbolic; `None` for BOM-managed dependencies.
    pub version: Option<VersionValue>,
}

impl Coordinate {
    /// The canonical `group:name` form, used for BOM classification and
    /// catalog-key derivation.
    #[must_use]
    pub fn module(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }

    /// Parse a flat coordinate string.
    ///
    /// Consumes the `':'`-split segments in order: group, name, then an
    /// optional classifier slot that is only taken when the segment is
    /// exactly [`AAR_CLASSIFIER`], then an optional version. The parser
    /// only ever produces [`VersionValue::Literal`]; resolving literals
    /// into symbolic references is the reverse transcoder's job.
    ///
    /// # Errors
    ///
    /// Returns [`BzlcatError::MalformedCoordinate`] when fewer than two
    /// segments are present or when group or name is empty.
    pub fn parse(input: &str) -> Result<Self, BzlcatError> {
        let malformed = |reason: &str| BzlcatError::MalformedCoordinate {
            coordinate: input.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = input.split(':').peekable();

        let group = match segments.next() {
            Some(group) if !group.is_empty() => group.to_string(),
            _ => return Err(malformed("missing group segment")),
        };
        let name = match segments.next() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(malformed("missing name segment")),
        };

        // The classifier slot is taken only on an exact `aar` match; any
        // other third segment falls through to the version slot.
        let classifier = if segments.peek() == Some(&AAR_CLASSIFIER) {
            segments.next();
            Some(AAR_CLASSIFIER.to_string())
        } else {
            None
        };

        let version = segments.next().map(|v| VersionValue::Literal(v.to_string()));

        let trailing: Vec<&str> = segments.collect();
        if !trailing.is_empty() {
            warn!(coordinate = input, ignored = ?trailing, "ignoring unrecognized trailing coordinate segments");
        }

        Ok(Self { group, name, classifier, version })
    }
}

impl FromStr for Coordinate {
    type Err = BzlcatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the flat `group:name[:classifier][:version]` form.
///
/// A symbolic [`VersionValue::Ref`] renders as its key; only literal
/// versions round-trip through [`Coordinate::parse`].
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        match &self.version {
            Some(VersionValue::Literal(version)) => write!(f, ":{version}"),
            Some(VersionValue::Ref(key)) => write!(f, ":{key}"),
            None => Ok(()),
        }
    }
}
