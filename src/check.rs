//! Requirement judgment for a single module
//!
//! Looks up the target dependency in a module's current release, parses the
//! declared range and decides whether the target version falls inside it.

use crate::domain::{CheckResult, ModuleOutcome, ModuleRecord, TargetDependency, VersionRange};
use semver::Version;

/// Judges modules against a target dependency and version
#[derive(Debug, Clone)]
pub struct RequirementChecker {
    target: TargetDependency,
    version: Version,
}

impl RequirementChecker {
    /// Create a new checker
    pub fn new(target: TargetDependency, version: Version) -> Self {
        Self { target, version }
    }

    /// The dependency being checked
    pub fn target(&self) -> &TargetDependency {
        &self.target
    }

    /// Check one module
    pub fn check(&self, record: &ModuleRecord) -> CheckResult {
        let metadata = &record.current_release.metadata;
        let Some(requirement) = self.target.find_requirement(metadata) else {
            return Ok(ModuleOutcome::NoDependency);
        };

        let range = VersionRange::parse(requirement)?;
        let requirement = requirement.to_string();
        if range.contains(&self.version) {
            Ok(ModuleOutcome::Satisfied { requirement })
        } else {
            Ok(ModuleOutcome::Outdated { requirement })
        }
    }
}
