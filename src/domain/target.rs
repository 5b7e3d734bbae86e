//! The dependency whose version ranges are being checked
//!
//! Two kinds of target exist:
//! - `puppet`: the runtime requirement, found in a release's `requirements`
//! - `owner/name` (or `owner-name`): a module dependency, found in `dependencies`

use crate::domain::module::{DependencyEntry, ReleaseMetadata};
use crate::error::ConfigError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Name of the runtime requirement
pub const RUNTIME_REQUIREMENT: &str = "puppet";

static MODULE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<owner>[[:alnum:]]+)[/-](?P<name>[[:alnum:]]+)$").unwrap()
});

/// Which dependency a module is inspected for
#[derive(Debug, Clone)]
pub enum TargetDependency {
    /// The `puppet` runtime requirement
    Runtime,
    /// Another module, matched in either `owner/name` or `owner-name` spelling
    Module {
        owner: String,
        name: String,
        pattern: Regex,
    },
}

impl TargetDependency {
    /// Resolve a dependency-name argument
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        if input == RUNTIME_REQUIREMENT {
            return Ok(TargetDependency::Runtime);
        }

        let caps = MODULE_NAME_RE
            .captures(input)
            .ok_or_else(|| ConfigError::invalid_dependency_name(input))?;
        let owner = caps["owner"].to_string();
        let name = caps["name"].to_string();
        let pattern = Regex::new(&format!(
            "^{}[/-]{}$",
            regex::escape(&owner),
            regex::escape(&name)
        ))
        .map_err(|_| ConfigError::invalid_dependency_name(input))?;

        Ok(TargetDependency::Module {
            owner,
            name,
            pattern,
        })
    }

    /// Returns true if this is the runtime requirement
    pub fn is_runtime(&self) -> bool {
        matches!(self, TargetDependency::Runtime)
    }

    /// Returns true if a dependency entry name refers to this target
    pub fn matches(&self, entry_name: &str) -> bool {
        match self {
            TargetDependency::Runtime => entry_name == RUNTIME_REQUIREMENT,
            TargetDependency::Module { pattern, .. } => pattern.is_match(entry_name),
        }
    }

    /// The list of a release's metadata this target lives in
    pub fn entries<'a>(&self, metadata: &'a ReleaseMetadata) -> &'a [DependencyEntry] {
        match self {
            TargetDependency::Runtime => &metadata.requirements,
            TargetDependency::Module { .. } => &metadata.dependencies,
        }
    }

    /// The version requirement of the first matching entry, if any
    pub fn find_requirement<'a>(&self, metadata: &'a ReleaseMetadata) -> Option<&'a str> {
        self.entries(metadata)
            .iter()
            .find(|entry| self.matches(&entry.name))
            .and_then(|entry| entry.version_requirement.as_deref())
    }
}

impl fmt::Display for TargetDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetDependency::Runtime => write!(f, "{}", RUNTIME_REQUIREMENT),
            TargetDependency::Module { owner, name, .. } => write!(f, "{}/{}", owner, name),
        }
    }
}
