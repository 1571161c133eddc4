// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep them after the fact)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Generation Errors
    // ========================================================================
    #[error("Could not generate content for file type: {path}")]
    UnknownTemplateKind { path: String },

    // ========================================================================
    // Registration Errors
    // ========================================================================
    #[error("Registration anchor not found: {anchor}")]
    AnchorNotFound { anchor: &'static str },

    // ========================================================================
    // Upload Errors (422-level equivalent)
    // ========================================================================
    #[error("The file field is required")]
    MissingUpload,

    #[error("The file '{file_name}' must be a file of type: xlsx")]
    InvalidUploadExtension { file_name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownTemplateKind { path } => vec![
                format!("'{}' does not match any known file role", path),
                "Generated paths must contain one of: Interface, Implementation, Service, \
                 Controller, Resource, Models, Store, Update"
                    .into(),
            ],
            Self::AnchorNotFound { anchor } => vec![
                format!("The provider no longer contains: {}", anchor),
                "Add the binding by hand or restore the expected boot() signature".into(),
            ],
            Self::MissingUpload => vec!["Attach a spreadsheet before submitting".into()],
            Self::InvalidUploadExtension { .. } => {
                vec!["Only .xlsx spreadsheets can be imported".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingUpload | Self::InvalidUploadExtension { .. } => ErrorCategory::Validation,
            Self::AnchorNotFound { .. } => ErrorCategory::NotFound,
            Self::UnknownTemplateKind { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
