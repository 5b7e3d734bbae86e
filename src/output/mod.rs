//! Output formatting for check results
//!
//! This module provides:
//! - Prefixed diagnostic lines (`[-]` info, `[+]` warning, `[!]` error)
//! - Per-module result lines
//! - The final summary line

mod text;

pub use text::Reporter;

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings, errors and the summary
    #[default]
    Normal,
    /// Also info lines for every request and every fine module
    Verbose,
}

impl Verbosity {
    /// Create a verbosity level from the CLI flag
    pub fn from_flag(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}
