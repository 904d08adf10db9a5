//! bzlcat CLI entry point.
//!
//! Handles command-line argument parsing, error display, and command
//! execution for the two transcoding directions:
//! - `emit` - version catalog → `maven.install` block for `MODULE.bazel`
//! - `import` - flat coordinate list → version catalog entries

use anyhow::Result;
use bzlcat::cli;
use bzlcat::core::user_friendly_error;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
