//! Application layer errors.
//!
//! These errors represent traversal and filesystem failures, not rule
//! validation. Rule errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while orchestrating a rename pass.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The root path does not exist or is not a directory. Fatal: raised
    /// before any mutation.
    #[error("Invalid root '{path}': {reason}", path = path.display())]
    InvalidRoot { path: PathBuf, reason: String },

    /// The filesystem rejected an operation for lack of permission.
    /// Recoverable per-file; the service converts it into a skip.
    #[error("Permission denied for {path}", path = path.display())]
    PermissionDenied { path: PathBuf },

    /// Any other filesystem failure.
    #[error("Filesystem error at {path}: {reason}", path = path.display())]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidRoot { path, .. } => vec![
                format!("'{}' must be an existing directory", path.display()),
                "Check the path for typos".into(),
                "Pass the tree root as the first argument to 'renamo apply'".into(),
            ],
            Self::PermissionDenied { path } => vec![
                format!("No permission to rename: {}", path.display()),
                "Check ownership and directory write permissions".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the file still exists and is readable".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRoot { .. } => ErrorCategory::InvalidRoot,
            Self::PermissionDenied { .. } | Self::FilesystemError { .. } => {
                ErrorCategory::Filesystem
            }
        }
    }
}
