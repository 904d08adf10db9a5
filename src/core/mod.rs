//! Core types and error handling for bzlcat.
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** ([`BzlcatError`]) for precise handling in code
//! 2. **User-friendly messages** ([`ErrorContext`]) with actionable suggestions
//!    for CLI users
//!
//! Every fallible core operation returns `Result<_, BzlcatError>`; the CLI
//! boundary converts to `anyhow::Result` and funnels failures through
//! [`user_friendly_error`] before exiting non-zero. All errors are fatal to
//! the current invocation: the transcoder has no partial-result mode and no
//! retry, since its inputs are static documents.

pub mod error;

pub use error::{BzlcatError, ErrorContext, user_friendly_error};
