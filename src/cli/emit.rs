//! Render the version catalog into a `maven.install` block.
//!
//! The forward direction of the transcoder. Loads and validates the
//! catalog, transcodes it, and writes the complete rendered block in a
//! single operation - either the whole document is produced or the command
//! fails before emitting anything.
//!
//! ```bash
//! bzlcat emit
//! bzlcat emit --catalog app/gradle/libs.versions.toml -o maven.MODULE.bazel
//! ```

use crate::catalog::Catalog;
use crate::constants::{COMPOSE_BOM_COORDINATE, DEFAULT_CATALOG_PATH};
use crate::transcode::forward;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Command to render the catalog into a Bazel maven extension block.
#[derive(Args)]
pub struct EmitCommand {
    /// Path to the version catalog
    #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,

    /// Canonical group:name routed into the BOM list
    #[arg(long, value_name = "GROUP:NAME", default_value = COMPOSE_BOM_COORDINATE)]
    bom_coordinate: String,

    /// Write the rendered block to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl EmitCommand {
    /// Execute the emit command.
    ///
    /// Fail-fast: any catalog or resolution error aborts before a byte of
    /// output is written.
    pub fn execute(self) -> Result<()> {
        let catalog = Catalog::load(&self.catalog)?;
        let install = forward::transcode(&catalog, &self.bom_coordinate)?;
        let rendered = install.render();

        match &self.output {
            Some(path) => std::fs::write(path, rendered)?,
            None => println!("{rendered}"),
        }
        Ok(())
    }
}
