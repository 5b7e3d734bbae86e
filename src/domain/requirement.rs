//! Version requirement parsing
//!
//! Registries express acceptable dependency versions as a half-open range:
//! `>= 4.13.1 < 10.0.0`. Bounds are compared with semantic version ordering.

use crate::error::RequirementError;
use regex::Regex;
use semver::Version;
use std::sync::LazyLock;

static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^>=[[:blank:]]*(?P<lower>\S+?)[[:blank:]]+<[[:blank:]]*(?P<upper>\S+?)[[:blank:]]*$")
        .unwrap()
});

/// Parse a version leniently.
///
/// Short numeric versions are padded with zeros (`6` -> `6.0.0`,
/// `4.10` -> `4.10.0`); everything else goes through `semver`.
pub fn parse_version(input: &str) -> Result<Version, semver::Error> {
    let input = input.trim();
    match Version::parse(input) {
        Ok(version) => Ok(version),
        Err(err) => {
            let parts: Vec<&str> = input.split('.').collect();
            let numeric = parts
                .iter()
                .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()));
            if !numeric || parts.len() >= 3 {
                return Err(err);
            }
            let mut padded = parts.join(".");
            for _ in parts.len()..3 {
                padded.push_str(".0");
            }
            Version::parse(&padded)
        }
    }
}

/// Half-open version range: lower inclusive, upper exclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    pub lower: Version,
    pub upper: Version,
}

impl VersionRange {
    /// Parse a `>= lower < upper` requirement string
    pub fn parse(requirement: &str) -> Result<Self, RequirementError> {
        let caps = RANGE_PATTERN
            .captures(requirement)
            .ok_or_else(|| RequirementError::Malformed {
                requirement: requirement.to_string(),
            })?;

        let bound = |name: &str| -> Result<Version, RequirementError> {
            let raw = &caps[name];
            parse_version(raw).map_err(|e| RequirementError::InvalidBound {
                requirement: requirement.to_string(),
                bound: raw.to_string(),
                message: e.to_string(),
            })
        };

        Ok(Self {
            lower: bound("lower")?,
            upper: bound("upper")?,
        })
    }

    /// Returns true if `version` lies within the range
    pub fn contains(&self, version: &Version) -> bool {
        *version >= self.lower && *version < self.upper
    }
}
