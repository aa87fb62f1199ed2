//! Rule Validator
//!
//! Stateful runner over a [`RuleSet`]: after [`ValidatorFields::validate`]
//! the errors of the last pass (or the validated snapshot) can be read back.

use serde_json::Value;

use super::error::EntityValidationError;
use super::fields_errors::FieldsErrors;
use super::rule::RuleSet;

/// Validator contract shared by every entity
pub trait ValidatorFields<T> {
    /// Errors from the last failed pass
    fn errors(&self) -> Option<&FieldsErrors>;

    /// Snapshot from the last successful pass
    fn validated_data(&self) -> Option<&T>;

    /// Run every rule against `data`; `true` when nothing failed
    fn validate(&mut self, data: &T) -> bool;
}

/// Validates JSON data bags against a [`RuleSet`]
#[derive(Debug, Clone)]
pub struct RuleValidator {
    rules: RuleSet,
    errors: Option<FieldsErrors>,
    validated_data: Option<Value>,
}

impl RuleValidator {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            errors: None,
            validated_data: None,
        }
    }

    #[inline]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// One-shot validation without keeping state
    pub fn check(&self, data: &Value) -> Result<(), EntityValidationError> {
        let errors = self.rules.check(data);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(EntityValidationError::new(errors))
        }
    }
}

impl ValidatorFields<Value> for RuleValidator {
    fn errors(&self) -> Option<&FieldsErrors> {
        self.errors.as_ref()
    }

    fn validated_data(&self) -> Option<&Value> {
        self.validated_data.as_ref()
    }

    fn validate(&mut self, data: &Value) -> bool {
        let errors = self.rules.check(data);
        if errors.is_empty() {
            self.errors = None;
            self.validated_data = Some(data.clone());
            true
        } else {
            self.errors = Some(errors);
            self.validated_data = None;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldRules;
    use serde_json::json;

    fn validator() -> RuleValidator {
        RuleValidator::new(
            RuleSet::new()
                .field(FieldRules::new("name").required().string().max_length(5))
                .field(FieldRules::new("description").optional().string()),
        )
    }

    #[test]
    fn test_valid_data_is_snapshotted() {
        let mut validator = validator();
        let data = json!({ "name": "Movie", "description": null });
        assert!(validator.validate(&data));
        assert!(validator.errors().is_none());
        assert_eq!(validator.validated_data(), Some(&data));
    }

    #[test]
    fn test_invalid_data_reports_every_field() {
        let mut validator = validator();
        assert!(!validator.validate(&json!({ "name": 8, "description": 8 })));
        assert!(validator.validated_data().is_none());

        let errors = validator.errors().unwrap();
        assert_eq!(
            errors.get("name").unwrap(),
            [
                "name must be a string",
                "name must be shorter than or equal to 5 characters",
            ]
        );
        assert_eq!(
            errors.get("description").unwrap(),
            ["description must be a string"]
        );
    }

    #[test]
    fn test_state_reflects_last_pass() {
        let mut validator = validator();
        assert!(!validator.validate(&json!({ "name": "" })));
        assert!(validator.errors().is_some());

        assert!(validator.validate(&json!({ "name": "Movie" })));
        assert!(validator.errors().is_none());
        assert!(validator.validated_data().is_some());
    }

    #[test]
    fn test_check_returns_error() {
        let err = validator().check(&json!({ "name": "too long" })).unwrap_err();
        assert_eq!(
            err.errors().get("name").unwrap(),
            ["name must be shorter than or equal to 5 characters"]
        );
        assert!(validator().check(&json!({ "name": "ok" })).is_ok());
    }
}
