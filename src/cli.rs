//! CLI argument parsing module for forge-outdated

use crate::domain::{parse_version, TargetDependency};
use crate::error::ConfigError;
use crate::output::Verbosity;
use crate::registry::{ForgeClient, QueryFilters, DEFAULT_BASE_URL};
use clap::Parser;
use semver::Version;
use url::Url;

/// List Forge modules whose dependency on a module (or on puppet itself)
/// excludes a given version
#[derive(Parser, Debug, Clone)]
#[command(name = "forge-outdated", version, about = "Find modules with outdated dependency ranges")]
pub struct CliArgs {
    /// Dependency to check: `puppet` or `owner/module`
    #[arg(value_name = "dependency-name")]
    pub dependency_name: String,

    /// Version the dependency ranges must include
    #[arg(value_name = "dependency-version")]
    pub dependency_version: String,

    // General options
    /// Run verbosely
    #[arg(short, long, overrides_with = "no_verbose")]
    pub verbose: bool,

    /// Disable an earlier --verbose
    #[arg(long, overrides_with = "verbose")]
    pub no_verbose: bool,

    // Filtering options
    /// Only consider modules owned by OWNER
    #[arg(short, long, value_name = "OWNER")]
    pub owner: Option<String>,

    /// Only consider modules matching QUERY
    #[arg(short, long, value_name = "QUERY")]
    pub query: Option<String>,

    /// Registry API base URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

/// Validated run configuration
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub target: TargetDependency,
    pub version: Version,
    pub filters: QueryFilters,
    pub base_url: Url,
    pub verbosity: Verbosity,
}

impl CliArgs {
    /// Effective verbose flag
    pub fn is_verbose(&self) -> bool {
        self.verbose && !self.no_verbose
    }

    /// Listing filters forwarded to the registry
    pub fn filters(&self) -> QueryFilters {
        QueryFilters {
            owner: self.owner.clone(),
            query: self.query.clone(),
        }
    }

    /// Validate the arguments into a run configuration
    pub fn to_config(&self) -> Result<CheckConfig, ConfigError> {
        let target = TargetDependency::parse(&self.dependency_name)?;
        let version = parse_version(&self.dependency_version).map_err(|e| {
            ConfigError::invalid_target_version(&self.dependency_version, e.to_string())
        })?;
        let base_url = ForgeClient::parse_base_url(&self.base_url)?;

        Ok(CheckConfig {
            target,
            version,
            filters: self.filters(),
            base_url,
            verbosity: Verbosity::from_flag(self.is_verbose()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_positional_args() {
        let args = CliArgs::parse_from(["forge-outdated", "puppetlabs/stdlib", "9.0.0"]);
        assert_eq!(args.dependency_name, "puppetlabs/stdlib");
        assert_eq!(args.dependency_version, "9.0.0");
        assert!(!args.is_verbose());
        assert!(args.owner.is_none());
        assert!(args.query.is_none());
        assert_eq!(args.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_wrong_positional_count() {
        assert!(CliArgs::try_parse_from(["forge-outdated"]).is_err());
        assert!(CliArgs::try_parse_from(["forge-outdated", "puppet"]).is_err());
        assert!(CliArgs::try_parse_from(["forge-outdated", "puppet", "8.0.0", "extra"]).is_err());
    }

    #[test]
    fn test_verbose_flags() {
        let args = CliArgs::parse_from(["forge-outdated", "-v", "puppet", "8.0.0"]);
        assert!(args.is_verbose());

        let args = CliArgs::parse_from(["forge-outdated", "--verbose", "puppet", "8.0.0"]);
        assert!(args.is_verbose());

        let args =
            CliArgs::parse_from(["forge-outdated", "--verbose", "--no-verbose", "puppet", "8.0.0"]);
        assert!(!args.is_verbose());

        let args =
            CliArgs::parse_from(["forge-outdated", "--no-verbose", "--verbose", "puppet", "8.0.0"]);
        assert!(args.is_verbose());
    }

    #[test]
    fn test_filters() {
        let args = CliArgs::parse_from([
            "forge-outdated",
            "-o",
            "puppetlabs",
            "--query=apache",
            "puppet",
            "8.0.0",
        ]);
        assert_eq!(
            args.filters(),
            QueryFilters {
                owner: Some("puppetlabs".to_string()),
                query: Some("apache".to_string()),
            }
        );

        let args = CliArgs::parse_from(["forge-outdated", "--owner=voxpupuli", "-q", "nginx", "puppet", "8"]);
        assert_eq!(args.owner.as_deref(), Some("voxpupuli"));
        assert_eq!(args.query.as_deref(), Some("nginx"));
    }

    #[test]
    fn test_to_config() {
        let args = CliArgs::parse_from(["forge-outdated", "-v", "puppetlabs-stdlib", "9.1"]);
        let config = args.to_config().unwrap();
        assert_eq!(config.target.to_string(), "puppetlabs/stdlib");
        assert_eq!(config.version, Version::new(9, 1, 0));
        assert_eq!(config.verbosity, Verbosity::Verbose);
        assert_eq!(config.base_url.as_str(), "https://forgeapi.puppet.com/");
    }

    #[test]
    fn test_to_config_invalid_dependency_name() {
        let args = CliArgs::parse_from(["forge-outdated", "bad name", "1.0.0"]);
        let err = args.to_config().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDependencyName { .. }));
    }

    #[test]
    fn test_to_config_invalid_version() {
        let args = CliArgs::parse_from(["forge-outdated", "puppet", "eight"]);
        let err = args.to_config().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTargetVersion { ref value, .. } if value == "eight"));
    }

    #[test]
    fn test_to_config_invalid_base_url() {
        let args = CliArgs::parse_from(["forge-outdated", "--base-url", "::", "puppet", "8.0.0"]);
        let err = args.to_config().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }
}
