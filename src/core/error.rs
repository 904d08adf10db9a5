//! Error handling for bzlcat.
//!
//! This module defines the error taxonomy for both transcoding directions
//! plus the user-facing reporting layer:
//!
//! - [`BzlcatError`] - enumerated error types for all failure cases
//! - [`ErrorContext`] - wrapper that adds suggestions and details for CLI display
//! - [`user_friendly_error`] - convert any error into a displayable context
//!
//! # Error Categories
//!
//! - **Catalog loading**: [`BzlcatError::CatalogNotFound`],
//!   [`BzlcatError::CatalogParseError`], [`BzlcatError::LibraryInvalid`]
//! - **Version resolution**: [`BzlcatError::UnresolvedVersionRef`]
//! - **Coordinate parsing**: [`BzlcatError::MalformedCoordinate`]
//! - **I/O and TOML**: automatic conversions from [`std::io::Error`] and
//!   [`toml::de::Error`]
//!
//! Ambiguous-match situations (duplicate version values, duplicate derived
//! catalog keys) are deliberately *not* errors: they resolve first-match /
//! last-writer-wins and are surfaced as `tracing` warnings by the
//! transcoders instead.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for bzlcat operations.
///
/// Each variant carries enough context (file paths, library keys, offending
/// input) for the message to stand on its own without a backtrace.
#[derive(Error, Debug)]
pub enum BzlcatError {
    /// The version catalog file does not exist.
    #[error("Version catalog not found at {path}")]
    CatalogNotFound {
        /// Path that was checked for the catalog
        path: String,
    },

    /// The catalog file exists but is not well-formed TOML or does not
    /// match the catalog schema.
    #[error("Invalid version catalog syntax in {file}")]
    CatalogParseError {
        /// Path to the catalog file that failed to parse
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// A library entry is missing its coordinates.
    ///
    /// Every `[libraries]` entry must declare either `module = "group:name"`
    /// or both `group` and `name`.
    #[error("Invalid library entry '{library}': {reason}")]
    LibraryInvalid {
        /// Catalog key of the offending library
        library: String,
        /// Why the entry was rejected
        reason: String,
    },

    /// A `version.ref` points at a key absent from the `[versions]` table.
    ///
    /// Treating this as "no version" would silently drop the dependency's
    /// version from the generated artifact list, so it fails loudly instead.
    #[error("Version reference '{reference}' for library '{library}' not found in the version table")]
    UnresolvedVersionRef {
        /// Catalog key of the library carrying the dangling reference
        library: String,
        /// The version key that could not be resolved
        reference: String,
    },

    /// A flat coordinate string could not be split into at least
    /// `group:name`.
    #[error("Malformed coordinate '{coordinate}': {reason}")]
    MalformedCoordinate {
        /// The coordinate string as supplied
        coordinate: String,
        /// Why it was rejected
        reason: String,
    },

    /// I/O error from the standard library
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error without catalog context
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// User-friendly error wrapper for CLI display.
///
/// Wraps a [`BzlcatError`] with an optional actionable suggestion and
/// optional additional details. Displayed to stderr with terminal colors:
/// the error in red, details in yellow, the suggestion in green.
pub struct ErrorContext {
    /// The underlying error
    pub error: BzlcatError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: BzlcatError) -> Self {
        Self { error, suggestion: None, details: None }
    }

    /// Add an actionable suggestion for resolving the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining why the error occurred.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details, and suggestion to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// Known [`BzlcatError`] variants get tailored suggestions; everything else
/// falls back to a generic context that still shows the original message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    match error.downcast::<BzlcatError>() {
        Ok(bzlcat_error) => create_error_context(bzlcat_error),
        Err(other) => {
            ErrorContext::new(BzlcatError::IoError(std::io::Error::other(other.to_string())))
                .with_suggestion("Run with --verbose for more detail")
        }
    }
}

fn create_error_context(error: BzlcatError) -> ErrorContext {
    match &error {
        BzlcatError::CatalogNotFound { path } => {
            let details = format!("bzlcat looked for the catalog at {path}");
            ErrorContext::new(error)
                .with_suggestion(
                    "Pass --catalog with the path to your libs.versions.toml, or run from the project root",
                )
                .with_details(details)
        }
        BzlcatError::CatalogParseError { .. } => ErrorContext::new(error)
            .with_suggestion(
                "Check the TOML syntax in the catalog. Verify quotes, brackets, and table headers",
            )
            .with_details(
                "The catalog must contain a [versions] table of strings and a [libraries] table of entries",
            ),
        BzlcatError::LibraryInvalid { .. } => ErrorContext::new(error).with_suggestion(
            "Declare either module = \"group:name\" or both group and name on the library entry",
        ),
        BzlcatError::UnresolvedVersionRef { reference, .. } => {
            let suggestion =
                format!("Add '{reference}' to the [versions] table or fix the version.ref spelling");
            ErrorContext::new(error).with_suggestion(suggestion).with_details(
                "Emitting the library without its version would silently change what the resolver pins",
            )
        }
        BzlcatError::MalformedCoordinate { .. } => ErrorContext::new(error).with_suggestion(
            "Coordinates must have the form group:name[:aar][:version], e.g. androidx.core:core:1.13.1",
        ),
        BzlcatError::IoError(_) | BzlcatError::TomlError(_) => ErrorContext::new(error),
    }
}
