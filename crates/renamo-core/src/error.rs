//! Unified error handling for Renamo Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with categories the CLI maps to exit codes and
//! user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Renamo Core operations.
#[derive(Debug, Error, Clone)]
pub enum RenamoError {
    /// Errors from the domain layer (rule validation).
    #[error("Rule error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (traversal and filesystem).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl RenamoError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Renamo".into(),
                "Please report this issue at: https://github.com/cosecruz/renamo/issues".into(),
            ],
        }
    }

    /// Get error category for display/exit-code purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories the CLI translates to exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid rules or arguments.
    Validation,
    /// The root path is missing or not a directory.
    InvalidRoot,
    /// A filesystem operation failed.
    Filesystem,
    /// Everything else.
    Internal,
}

/// Convenient result type alias.
pub type RenamoResult<T> = Result<T, RenamoError>;
