//! Entity Validation Error

use thiserror::Error;

use super::fields_errors::FieldsErrors;

/// One or more field rules failed
///
/// Always carries the complete map for the validation pass, never only the
/// first violation. Displays as `field: msg, msg; field: msg`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{errors}")]
pub struct EntityValidationError {
    errors: FieldsErrors,
}

impl EntityValidationError {
    pub fn new(errors: FieldsErrors) -> Self {
        Self { errors }
    }

    #[inline]
    pub fn errors(&self) -> &FieldsErrors {
        &self.errors
    }

    pub fn into_errors(self) -> FieldsErrors {
        self.errors
    }
}

impl From<FieldsErrors> for EntityValidationError {
    fn from(errors: FieldsErrors) -> Self {
        Self::new(errors)
    }
}
