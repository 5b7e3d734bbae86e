//! Result of checking one module

use crate::error::RequirementError;

/// Outcome of a successful requirement check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleOutcome {
    /// The module does not declare the target dependency
    NoDependency,
    /// The declared range includes the target version
    Satisfied { requirement: String },
    /// The declared range excludes the target version
    Outdated { requirement: String },
}

/// Result of checking a module; errors are malformed requirements
pub type CheckResult = Result<ModuleOutcome, RequirementError>;

/// Summary bucket a module is counted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Ok,
    Outdated,
    Malformed,
}

impl Classification {
    /// Classify a check result
    pub fn of(result: &CheckResult) -> Self {
        match result {
            Ok(ModuleOutcome::NoDependency) | Ok(ModuleOutcome::Satisfied { .. }) => {
                Classification::Ok
            }
            Ok(ModuleOutcome::Outdated { .. }) => Classification::Outdated,
            Err(_) => Classification::Malformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_of() {
        assert_eq!(
            Classification::of(&Ok(ModuleOutcome::NoDependency)),
            Classification::Ok
        );
        assert_eq!(
            Classification::of(&Ok(ModuleOutcome::Satisfied {
                requirement: ">= 1.0.0 < 2.0.0".to_string()
            })),
            Classification::Ok
        );
        assert_eq!(
            Classification::of(&Ok(ModuleOutcome::Outdated {
                requirement: ">= 1.0.0 < 2.0.0".to_string()
            })),
            Classification::Outdated
        );
        assert_eq!(
            Classification::of(&Err(RequirementError::Malformed {
                requirement: "~> 1.0".to_string()
            })),
            Classification::Malformed
        );
    }
}
