//! Text reporter for human-readable display
//!
//! Info lines and the summary go to the standard sink, warnings and errors to
//! the error sink. Both sinks are injected so tests can capture them.

use crate::domain::{CheckResult, CheckSummary, ModuleOutcome, TargetDependency};
use crate::output::Verbosity;
use colored::Colorize;
use std::io::{self, Write};

const INFO_PREFIX: &str = "[-]";
const WARN_PREFIX: &str = "[+]";
const ERROR_PREFIX: &str = "[!]";

/// Writes diagnostics and the summary
pub struct Reporter<O, E> {
    out: O,
    err: E,
    verbosity: Verbosity,
    color: bool,
}

impl Reporter<io::Stdout, io::Stderr> {
    /// Reporter writing to the process's standard streams
    ///
    /// `colored` decides on its own from stdout; the caller's decision wins.
    pub fn stdio(verbosity: Verbosity, color: bool) -> Self {
        colored::control::set_override(color);
        Self::with_color(io::stdout(), io::stderr(), verbosity, color)
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    /// Create a new reporter without colors
    pub fn new(out: O, err: E, verbosity: Verbosity) -> Self {
        Self::with_color(out, err, verbosity, false)
    }

    /// Create a new reporter with color option
    pub fn with_color(out: O, err: E, verbosity: Verbosity, color: bool) -> Self {
        Self {
            out,
            err,
            verbosity,
            color,
        }
    }

    /// Returns true if info lines are printed
    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// Info line, printed in verbose mode only
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        if !self.is_verbose() {
            return Ok(());
        }
        let prefix = if self.color {
            INFO_PREFIX.dimmed().to_string()
        } else {
            INFO_PREFIX.to_string()
        };
        writeln!(self.out, "{} {}", prefix, message)
    }

    /// Warning line
    pub fn warn(&mut self, message: &str) -> io::Result<()> {
        let prefix = if self.color {
            WARN_PREFIX.yellow().bold().to_string()
        } else {
            WARN_PREFIX.to_string()
        };
        writeln!(self.err, "{} {}", prefix, message)
    }

    /// Error line
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        let prefix = if self.color {
            ERROR_PREFIX.red().bold().to_string()
        } else {
            ERROR_PREFIX.to_string()
        };
        writeln!(self.err, "{} {}", prefix, message)
    }

    /// Report the outcome of one module
    pub fn module(
        &mut self,
        name: &str,
        target: &TargetDependency,
        result: &CheckResult,
    ) -> io::Result<()> {
        match result {
            Ok(ModuleOutcome::NoDependency) => {
                self.info(&format!("{}: no dependency on {}", name, target))
            }
            Ok(ModuleOutcome::Satisfied { requirement }) => {
                self.info(&format!("{} ({}) is fine", name, requirement))
            }
            Ok(ModuleOutcome::Outdated { requirement }) => {
                self.warn(&format!("{} ({}) needs updating", name, requirement))
            }
            Err(e) => self.error(&format!("{} ({}): ignored ({})", name, e.requirement(), e)),
        }
    }

    /// Final summary line
    pub fn summary(&mut self, summary: &CheckSummary) -> io::Result<()> {
        writeln!(self.out, "{}", summary)?;
        self.flush()
    }

    /// Flush both sinks
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    /// Consume the reporter and return its sinks
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
