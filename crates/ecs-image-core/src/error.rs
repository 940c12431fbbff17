//! Unified error handling for ecs-image core.
//!
//! Wraps application errors and the aggregated validation report, with
//! user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::Violations;

/// Root error type for ecs-image core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EcsImageError {
    /// The image configuration broke one or more rules.
    #[error("Invalid image configuration: {0}")]
    Invalid(Violations),

    /// Errors from the application layer (loading, catalog access).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl From<Violations> for EcsImageError {
    fn from(violations: Violations) -> Self {
        Self::Invalid(violations)
    }
}

impl EcsImageError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Invalid(violations) => {
                let mut out: Vec<String> = Vec::new();
                for v in violations {
                    let hint = v.suggestion();
                    if !out.contains(&hint) {
                        out.push(hint);
                    }
                }
                out
            }
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in ecs-image".into(),
                "Please report this issue with the configuration that triggered it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Invalid(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// The violations behind an [`EcsImageError::Invalid`], if any.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Invalid(v) => Some(v),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type EcsImageResult<T> = Result<T, EcsImageError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Violation;

    #[test]
    fn invalid_suggestions_are_deduplicated() {
        let err = EcsImageError::Invalid(
            vec![
                Violation::UnknownRegion { region: "a".into() },
                Violation::UnknownRegion { region: "b".into() },
            ]
            .into_iter()
            .collect(),
        );
        assert_eq!(err.suggestions().len(), 1);
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn application_category_passes_through() {
        let err: EcsImageError = ApplicationError::CatalogLockError.into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.violations().is_none());
    }
}
