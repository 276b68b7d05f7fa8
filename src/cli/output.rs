//! Output helpers for the CLI.

use crate::error::Result;
use serde::Serialize;

/// Helper for printing results and diagnostics.
pub struct Output {
    quiet: bool,
}

impl Output {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print a serializable value as pretty JSON on stdout.
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print a message on stderr unless quiet mode is on.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    /// Print an error message on stderr.
    pub fn error(&self, message: &str) {
        eprintln!("Error: {message}");
    }
}
