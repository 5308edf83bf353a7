//! Unified error handling for Gdcheck Core.
//!
//! One root error type wraps application errors with rich context and
//! user-actionable suggestions. Note the asymmetry with most validators:
//! a *failed check* is not an error — it is an ordinary `Fail` entry in
//! the report. Errors here mean the run could not produce a report.

use thiserror::Error;

use crate::application::ApplicationError;

/// Root error type for Gdcheck Core operations.
#[derive(Debug, Error, Clone)]
pub enum GdcheckError {
    /// Errors from the application layer (dataset acquisition failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl GdcheckError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in gdcheck".into(),
                "Please report it with the dataset that triggered it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
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
pub type GdcheckResult<T> = Result<T, GdcheckError>;
