//! Application layer errors.
//!
//! These errors represent failures around validation (loading input,
//! reaching the region catalog), not rule violations. Rule violations are
//! `Violation`s from `crate::domain`.

use std::{io, path::PathBuf};
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while preparing or running a validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The configuration file could not be read.
    #[error("Failed to load image configuration from {path}: {reason}")]
    ConfigLoad {
        path: PathBuf,
        kind: io::ErrorKind,
        reason: String,
    },

    /// The file was read but is not a well-formed image configuration.
    #[error("Malformed image configuration in {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// The configuration file has an extension we cannot parse.
    #[error("Unsupported configuration format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Region catalog access failed (lock poisoned, etc.).
    #[error("Region catalog error")]
    CatalogLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigLoad { path, reason, .. } => vec![
                format!("Could not read {}: {}", path.display(), reason),
                "Check that the file exists and is readable".into(),
            ],
            Self::ConfigParse { path, .. } => vec![
                format!("Fix the syntax of {}", path.display()),
                "The file must be valid TOML or JSON with image_* keys".into(),
            ],
            Self::UnsupportedFormat { path } => vec![
                format!("Cannot tell the format of {}", path.display()),
                "Use a .toml or .json file".into(),
            ],
            Self::CatalogLockError => vec![
                "The region catalog is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigLoad { kind, .. } if *kind == io::ErrorKind::NotFound => {
                ErrorCategory::NotFound
            }
            Self::ConfigLoad { .. } => ErrorCategory::Internal,
            Self::ConfigParse { .. } => ErrorCategory::Validation,
            Self::UnsupportedFormat { .. } => ErrorCategory::Validation,
            Self::CatalogLockError => ErrorCategory::Internal,
        }
    }
}
