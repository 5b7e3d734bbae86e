//! Running counters of checked modules

use super::Classification;
use std::fmt;

/// Counts of modules per classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub ok: usize,
    pub outdated: usize,
    pub malformed: usize,
}

impl CheckSummary {
    /// Creates an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one module
    pub fn record(&mut self, classification: Classification) {
        match classification {
            Classification::Ok => self.ok += 1,
            Classification::Outdated => self.outdated += 1,
            Classification::Malformed => self.malformed += 1,
        }
    }

    /// Total number of modules checked
    pub fn total(&self) -> usize {
        self.ok + self.outdated + self.malformed
    }
}

impl fmt::Display for CheckSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} modules checked: {} ok; {} outdated; {} malformed",
            self.total(),
            self.ok,
            self.outdated,
            self.malformed
        )
    }
}
