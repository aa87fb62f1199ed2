//! Catalog Error Types
//!
//! Crate-level error that wraps the kernel failures and maps them onto
//! `kernel::error::kind::ErrorKind`.

use kernel::error::kind::ErrorKind;
use kernel::id::InvalidIdError;
use kernel::validation::{EntityValidationError, FieldsErrors};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CategoryResult<T> = Result<T, CategoryError>;

/// Catalog-specific error variants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    /// Malformed category identifier
    #[error("Invalid category id: {0}")]
    InvalidId(#[from] InvalidIdError),

    /// One or more field rules failed
    #[error("Category validation failed: {0}")]
    Validation(#[from] EntityValidationError),
}

impl CategoryError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CategoryError::InvalidId(_) => ErrorKind::BadRequest,
            CategoryError::Validation(_) => ErrorKind::UnprocessableEntity,
        }
    }

    /// Per-field messages, when this is a validation failure
    pub fn fields_errors(&self) -> Option<&FieldsErrors> {
        match self {
            CategoryError::Validation(err) => Some(err.errors()),
            CategoryError::InvalidId(_) => None,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            CategoryError::InvalidId(e) => {
                tracing::warn!(value = %e.value(), "Malformed category id");
            }
            CategoryError::Validation(e) => {
                tracing::debug!(errors = %e, "Category rejected by validation");
            }
        }
    }
}
