//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The service provider to patch does not exist.
    #[error("AppServiceProvider not found at {path}")]
    ProviderNotFound { path: PathBuf },

    /// The remote post listing could not be fetched or decoded.
    #[error("Failed to fetch data from the API: {reason}")]
    UpstreamFetch { reason: String },

    /// Decoded spreadsheet rows could not be read.
    #[error("Invalid rows in {path}: {reason}")]
    InvalidRows { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ProviderNotFound { path } => vec![
                format!("Expected a provider at {}", path.display()),
                "Pass --provider to point at your AppServiceProvider".into(),
                "Or run from the Laravel project root".into(),
            ],
            Self::UpstreamFetch { .. } => vec![
                "Check the payload source and try again".into(),
                "Nothing was stored".into(),
            ],
            Self::InvalidRows { .. } => vec![
                "Rows must be a JSON array of string arrays, e.g. [[\"Hello\", \"World\"]]".into(),
                "Column 0 is the title and column 1 the body".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::ProviderNotFound { .. } => ErrorCategory::NotFound,
            Self::UpstreamFetch { .. } => ErrorCategory::Upstream,
            Self::InvalidRows { .. } => ErrorCategory::Validation,
        }
    }
}
