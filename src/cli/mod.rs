//! Command-line interface for bzlcat.
//!
//! Each subcommand lives in its own module with its own argument struct
//! and execution logic:
//!
//! - `emit` - transcode the version catalog into a `maven.install` block
//! - `import` - transcode flat coordinates back into catalog entries
//!
//! The two directions never run together; they are independent one-shot
//! batch conversions. Everything is synchronous: one document read, one
//! text write, nothing retried or shared across invocations.
//!
//! # Example
//!
//! ```bash
//! # Regenerate the maven extension block from the catalog
//! bzlcat emit > third_party/maven.MODULE.bazel
//!
//! # Migrate a hand-written artifact list into catalog entries
//! bzlcat import legacy-artifacts.txt >> gradle/libs.versions.toml
//! ```

mod emit;
mod import;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Main CLI structure for bzlcat.
///
/// Global verbosity flags feed the tracing filter; per-direction options
/// live on the subcommands.
#[derive(Parser)]
#[command(
    name = "bzlcat",
    about = "Transcode Gradle version catalogs into rules_jvm_external artifact lists and back",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output (equivalent to RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress warnings; only errors are reported
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Render the catalog into a maven.install block for MODULE.bazel.
    ///
    /// Reads `gradle/libs.versions.toml` (or --catalog), resolves every
    /// library's version reference, partitions artifacts from the BOM, and
    /// prints the complete block to stdout or --output.
    Emit(emit::EmitCommand),

    /// Convert flat maven coordinates into catalog-entry lines.
    ///
    /// Reads coordinates one per line from a file or stdin, resolves
    /// literal versions against the catalog's version table, and prints
    /// one `[libraries]` line per coordinate for manual copy into the
    /// catalog.
    Import(import::ImportCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// Initializes the tracing subscriber from the verbosity flags first,
    /// so transcoder diagnostics (ambiguous versions, duplicate keys,
    /// ignored segments) reach stderr.
    pub fn execute(self) -> Result<()> {
        self.init_logging();

        match self.command {
            Commands::Emit(cmd) => cmd.execute(),
            Commands::Import(cmd) => cmd.execute(),
        }
    }

    fn init_logging(&self) {
        let default_filter = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        // Diagnostics go to stderr so they never mix with generated text.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}
