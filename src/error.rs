//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ConfigError: Invalid command line input (fatal, checked before any request)
//! - RegistryError: Issues with registry communication (fatal)
//! - RequirementError: A module's version requirement could not be read
//!   (recoverable, counted as malformed)

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Module registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Writing diagnostics failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Dependency name is neither `puppet` nor `owner/name`
    #[error("dependency-name must be \"owner/module\", got \"{value}\"")]
    InvalidDependencyName { value: String },

    /// Target version could not be parsed
    #[error("invalid dependency-version '{value}': {message}")]
    InvalidTargetVersion { value: String, message: String },

    /// Registry base URL could not be parsed
    #[error("invalid base URL '{value}': {message}")]
    InvalidBaseUrl { value: String, message: String },
}

/// Errors related to module registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Network request failed
    #[error("failed to fetch {url}: {message}")]
    NetworkError { url: String, message: String },

    /// Registry answered with a non-success status
    #[error("failed to fetch {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Invalid response from registry
    #[error("invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    /// Timeout
    #[error("timeout while fetching {url}")]
    Timeout { url: String },

    /// Pagination cursor could not be turned into a URL
    #[error("invalid pagination cursor '{cursor}': {message}")]
    InvalidCursor { cursor: String, message: String },
}

/// Errors raised while reading a single module's version requirement
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequirementError {
    /// Requirement is not of the `>= lower < upper` form
    #[error("malformed version requirement")]
    Malformed { requirement: String },

    /// One of the bounds is not a version
    #[error("invalid version bound '{bound}': {message}")]
    InvalidBound {
        requirement: String,
        bound: String,
        message: String,
    },
}

impl ConfigError {
    /// Creates a new InvalidDependencyName error
    pub fn invalid_dependency_name(value: impl Into<String>) -> Self {
        ConfigError::InvalidDependencyName {
            value: value.into(),
        }
    }

    /// Creates a new InvalidTargetVersion error
    pub fn invalid_target_version(value: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidTargetVersion {
            value: value.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new NetworkError
    pub fn network_error(url: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::NetworkError {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(url: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::InvalidResponse {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(url: impl Into<String>) -> Self {
        RegistryError::Timeout { url: url.into() }
    }
}

impl RequirementError {
    /// The raw requirement string this error is about
    pub fn requirement(&self) -> &str {
        match self {
            RequirementError::Malformed { requirement } => requirement,
            RequirementError::InvalidBound { requirement, .. } => requirement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_invalid_dependency_name() {
        let err = ConfigError::invalid_dependency_name("bad name");
        let msg = format!("{}", err);
        assert_eq!(msg, "dependency-name must be \"owner/module\", got \"bad name\"");
    }

    #[test]
    fn test_config_error_invalid_target_version() {
        let err = ConfigError::invalid_target_version("x.y", "unexpected character");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid dependency-version 'x.y'"));
        assert!(msg.contains("unexpected character"));
    }

    #[test]
    fn test_registry_error_network() {
        let err = RegistryError::network_error("https://forge/v3/modules", "connection refused");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to fetch"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_registry_error_status() {
        let err = RegistryError::HttpStatus {
            url: "https://forge/v3/modules".to_string(),
            status: 503,
        };
        assert!(format!("{}", err).contains("HTTP 503"));
    }

    #[test]
    fn test_registry_error_timeout() {
        let err = RegistryError::timeout("https://forge/v3/modules");
        assert!(format!("{}", err).contains("timeout"));
    }

    #[test]
    fn test_requirement_error_messages() {
        let err = RequirementError::Malformed {
            requirement: "~> 1.0".to_string(),
        };
        assert_eq!(format!("{}", err), "malformed version requirement");
        assert_eq!(err.requirement(), "~> 1.0");

        let err = RequirementError::InvalidBound {
            requirement: ">= 1.x < 2.0.0".to_string(),
            bound: "1.x".to_string(),
            message: "unexpected character".to_string(),
        };
        assert!(format!("{}", err).starts_with("invalid version bound '1.x'"));
        assert_eq!(err.requirement(), ">= 1.x < 2.0.0");
    }

    #[test]
    fn test_app_error_from_config_error() {
        let app_err: AppError = ConfigError::invalid_dependency_name("bad").into();
        assert!(format!("{}", app_err).contains("dependency-name must be"));
    }

    #[test]
    fn test_app_error_from_registry_error() {
        let app_err: AppError = RegistryError::timeout("https://forge").into();
        assert!(format!("{}", app_err).contains("timeout"));
    }
}
