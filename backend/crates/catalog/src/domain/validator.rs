//! Category Validation
//!
//! Every validating path of [`Category`](super::Category) goes through the
//! [`CategoryValidator`] seam exactly once. [`CategoryRules`] is the
//! production implementation:
//!
//! | Field         | Rules                                  |
//! |---------------|----------------------------------------|
//! | `name`        | required, string, max length (255)     |
//! | `description` | optional, string                       |
//!
//! `is_active` and `created_at` carry no rules.

use kernel::validation::{EntityValidationError, FieldRules, RuleSet, RuleValidator};
use serde::Serialize;
use serde_json::{Value, json};

use crate::config::CategoryConfig;

/// The category fields governed by validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryFields {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CategoryFields {
    pub fn new(name: Option<String>, description: Option<String>) -> Self {
        Self { name, description }
    }

    /// JSON data bag handed to the rule engine
    pub fn to_data_bag(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
        })
    }
}

/// Validation seam for categories
#[cfg_attr(test, mockall::automock)]
pub trait CategoryValidator {
    /// Run one validation pass over `fields`
    fn validate(&self, fields: &CategoryFields) -> Result<(), EntityValidationError>;
}

/// Rule table backed category validator
#[derive(Debug, Clone)]
pub struct CategoryRules {
    validator: RuleValidator,
}

impl CategoryRules {
    pub fn new() -> Self {
        Self::from_config(&CategoryConfig::default())
    }

    pub fn from_config(config: &CategoryConfig) -> Self {
        Self {
            validator: RuleValidator::new(Self::rule_set(config)),
        }
    }

    /// Build the category rule table
    pub fn rule_set(config: &CategoryConfig) -> RuleSet {
        RuleSet::new()
            .field(
                FieldRules::new("name")
                    .required()
                    .string()
                    .max_length(config.name_max_length),
            )
            .field(FieldRules::new("description").optional().string())
    }

    /// Fresh stateful validator for raw payloads
    pub fn validator(&self) -> RuleValidator {
        self.validator.clone()
    }

    /// Validate an untyped payload (e.g. a request body)
    pub fn validate_payload(&self, payload: &Value) -> Result<(), EntityValidationError> {
        self.validator.check(payload)
    }
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryValidator for CategoryRules {
    fn validate(&self, fields: &CategoryFields) -> Result<(), EntityValidationError> {
        self.validator.check(&fields.to_data_bag())
    }
}
