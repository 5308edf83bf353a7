//! Application layer errors.
//!
//! These errors represent failures in orchestration — above all, failure
//! to obtain a dataset snapshot at all. Constraint violations are *not*
//! errors: they travel inside the report as `Fail` outcomes.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while obtaining or orchestrating a validation run.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A required dataset file does not exist.
    #[error("dataset table not found: {path}")]
    SourceMissing { path: PathBuf },

    /// A dataset file exists but could not be read.
    #[error("failed to read dataset table {path}: {reason}")]
    SourceUnreadable { path: PathBuf, reason: String },

    /// A dataset document is not parseable at all (broken JSON, not a
    /// malformed record — those become shape issues inside the snapshot).
    #[error("dataset table {path} is not valid JSON: {reason}")]
    SourceUnparseable { path: PathBuf, reason: String },

    /// Port/Adapter not configured.
    #[error("required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceMissing { path } => vec![
                format!("Expected a dataset file at: {}", path.display()),
                "Check that the dataset directory is correct".into(),
                "All five tables must be present: enemies.json, levels.json, \
                 enemy_level.json, projectiles.json, projectile_level.json"
                    .into(),
            ],
            Self::SourceUnreadable { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check file permissions".into(),
            ],
            Self::SourceUnparseable { path, .. } => vec![
                format!("The document at {} is not valid JSON", path.display()),
                "Each table must be a JSON array of records".into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {}", name),
                "This is likely a configuration error".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceMissing { .. } => ErrorCategory::NotFound,
            Self::SourceUnreadable { .. } => ErrorCategory::Internal,
            Self::SourceUnparseable { .. } => ErrorCategory::Validation,
            Self::AdapterNotConfigured { .. } => ErrorCategory::Configuration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_is_not_found() {
        let err = ApplicationError::SourceMissing {
            path: PathBuf::from("data/enemies.json"),
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("enemies.json"));
    }

    #[test]
    fn missing_source_suggestions_list_the_tables() {
        let err = ApplicationError::SourceMissing {
            path: PathBuf::from("data/levels.json"),
        };
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("projectile_level.json"))
        );
    }
}
