//! Convert flat maven coordinates into catalog-entry lines.
//!
//! The reverse direction: a one-shot batch migration of hand-written
//! dependency declarations into the catalog format. Coordinates arrive one
//! per line (blank lines and `#` comments skipped); the catalog supplies
//! the version table used to turn literal versions back into
//! `version.ref`s. Output goes to stdout for manual copy into the catalog.
//!
//! ```bash
//! bzlcat import legacy-artifacts.txt
//! echo "androidx.core:core:1.13.1" | bzlcat import -
//! ```

use crate::catalog::Catalog;
use crate::constants::DEFAULT_CATALOG_PATH;
use crate::coordinate::Coordinate;
use crate::transcode::reverse;
use anyhow::Result;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Command to convert a coordinate list into catalog entries.
#[derive(Args)]
pub struct ImportCommand {
    /// File holding one coordinate per line; "-" or omitted reads stdin
    coordinates: Option<PathBuf>,

    /// Path to the version catalog supplying the version table
    #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,
}

impl ImportCommand {
    /// Execute the import command.
    ///
    /// The whole input is parsed before anything is printed; a malformed
    /// coordinate anywhere in the list aborts without partial output.
    pub fn execute(self) -> Result<()> {
        let catalog = Catalog::load(&self.catalog)?;
        let input = self.read_input()?;

        let coordinates = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(Coordinate::parse)
            .collect::<Result<Vec<_>, _>>()?;

        for line in reverse::transcode(&coordinates, &catalog.versions) {
            println!("{line}");
        }
        Ok(())
    }

    fn read_input(&self) -> Result<String> {
        match &self.coordinates {
            Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
            _ => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}
