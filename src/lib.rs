//! bzlcat - Gradle version catalog / Bazel maven list transcoder
//!
//! A build-pipeline tool that converts between a Gradle version catalog
//! (`gradle/libs.versions.toml`: named version strings plus library entries
//! referencing them) and the flat Maven coordinate lists consumed by Bazel's
//! `rules_jvm_external` extension.
//!
//! # Architecture Overview
//!
//! Two independent, direction-specific pipelines share one data model (the
//! [`coordinate::Coordinate`] and the [`catalog::Catalog`]):
//!
//! - **Forward** (`bzlcat emit`): the catalog is loaded into ordered
//!   `versions` and `libraries` tables, every library is rendered into a
//!   Maven coordinate expression, the result is partitioned into artifact
//!   and BOM lists, and the three blocks are substituted into a fixed
//!   `maven.install(...)` template for `MODULE.bazel`.
//! - **Reverse** (`bzlcat import`): a flat list of coordinate strings is
//!   parsed, each coordinate's literal version is matched back against the
//!   catalog's version table by value, and one catalog-entry TOML line is
//!   printed per coordinate for manual copy into the catalog.
//!
//! Versions flow through both pipelines as a tagged
//! [`coordinate::VersionValue`] so that build-time-deferred references and
//! generation-time-baked literals can never be conflated: a reference
//! renders as a Starlark lookup against the emitted `maven_versions` dict,
//! a literal is inlined into the coordinate string.
//!
//! # Core Modules
//!
//! - [`catalog`] - Version catalog parsing and validation (libs.versions.toml)
//! - [`coordinate`] - Maven coordinate parsing and rendering
//! - [`transcode`] - Forward (catalog → Bazel) and reverse (coordinates → catalog) transcoding
//! - [`cli`] - Command-line interface with the `emit` and `import` subcommands
//! - [`core`] - Error types and user-facing error reporting
//!
//! # Example
//!
//! ```rust,no_run
//! use bzlcat::catalog::Catalog;
//! use bzlcat::constants::COMPOSE_BOM_COORDINATE;
//! use bzlcat::transcode::forward;
//! use std::path::Path;
//!
//! let catalog = Catalog::load(Path::new("gradle/libs.versions.toml"))?;
//! let install = forward::transcode(&catalog, COMPOSE_BOM_COORDINATE)?;
//! println!("{}", install.render());
//! # Ok::<(), bzlcat::core::BzlcatError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod constants;
pub mod coordinate;
pub mod core;
pub mod transcode;
