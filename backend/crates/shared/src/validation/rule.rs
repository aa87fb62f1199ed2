//! Validation Rules
//!
//! Rule tables are declared per field, in order:
//!
//! ```rust
//! use kernel::validation::{FieldRules, RuleSet};
//!
//! let rules = RuleSet::new()
//!     .field(FieldRules::new("name").required().string().max_length(255))
//!     .field(FieldRules::new("description").optional().string());
//! assert_eq!(rules.len(), 2);
//! ```
//!
//! Rules are independent predicates; a field collects the message of every
//! rule it fails.

use serde_json::Value;

use super::fields_errors::FieldsErrors;

/// A single field predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Not absent, not null, not `""`
    Required,
    /// Must be a JSON string
    String,
    /// Must be a string of at most this many characters
    MaxLength(usize),
}

impl Rule {
    /// Whether `value` (absent when `None`) satisfies the rule
    pub fn check(&self, value: Option<&Value>) -> bool {
        match self {
            Rule::Required => match value {
                None | Some(Value::Null) => false,
                Some(Value::String(s)) => !s.is_empty(),
                Some(_) => true,
            },
            Rule::String => matches!(value, Some(Value::String(_))),
            Rule::MaxLength(max) => match value {
                Some(Value::String(s)) => s.chars().count() <= *max,
                _ => false,
            },
        }
    }

    /// Violation message for `field`
    pub fn message(&self, field: &str) -> String {
        match self {
            Rule::Required => format!("{field} should not be empty"),
            Rule::String => format!("{field} must be a string"),
            Rule::MaxLength(max) => {
                format!("{field} must be shorter than or equal to {max} characters")
            }
        }
    }
}

/// Ordered rules for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    field: String,
    optional: bool,
    rules: Vec<Rule>,
}

impl FieldRules {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            optional: false,
            rules: Vec::new(),
        }
    }

    /// Skip every rule when the value is absent or null
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn required(self) -> Self {
        self.rule(Rule::Required)
    }

    pub fn string(self) -> Self {
        self.rule(Rule::String)
    }

    pub fn max_length(self, max: usize) -> Self {
        self.rule(Rule::MaxLength(max))
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[inline]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Record every failing rule for `value` into `errors`
    pub fn evaluate(&self, value: Option<&Value>, errors: &mut FieldsErrors) {
        if self.optional && matches!(value, None | Some(Value::Null)) {
            return;
        }
        for rule in &self.rules {
            if !rule.check(value) {
                errors.push(&self.field, rule.message(&self.field));
            }
        }
    }
}

/// Rule table for a whole data bag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    fields: Vec<FieldRules>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, rules: FieldRules) -> Self {
        self.fields.push(rules);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldRules> {
        self.fields.iter()
    }

    /// Evaluate every field against `data`
    ///
    /// Non-object data is treated as a bag where every field is absent.
    pub fn check(&self, data: &Value) -> FieldsErrors {
        let mut errors = FieldsErrors::new();
        for rules in &self.fields {
            rules.evaluate(data.get(rules.field()), &mut errors);
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    mod rules {
        use super::*;

        #[test]
        fn test_required() {
            assert!(!Rule::Required.check(None));
            assert!(!Rule::Required.check(Some(&Value::Null)));
            assert!(!Rule::Required.check(Some(&json!(""))));
            assert!(Rule::Required.check(Some(&json!(" "))));
            assert!(Rule::Required.check(Some(&json!("Movie"))));
            assert!(Rule::Required.check(Some(&json!(8))));
            assert!(Rule::Required.check(Some(&json!(false))));
        }

        #[test]
        fn test_string() {
            assert!(Rule::String.check(Some(&json!(""))));
            assert!(!Rule::String.check(None));
            assert!(!Rule::String.check(Some(&Value::Null)));
            assert!(!Rule::String.check(Some(&json!(8))));
            assert!(!Rule::String.check(Some(&json!(["a"]))));
        }

        #[test]
        fn test_max_length_counts_chars() {
            let rule = Rule::MaxLength(3);
            assert!(rule.check(Some(&json!("abc"))));
            assert!(rule.check(Some(&json!("日本語"))));
            assert!(!rule.check(Some(&json!("abcd"))));
            assert!(!rule.check(Some(&json!(8))));
            assert!(!rule.check(Some(&Value::Null)));
        }

        #[test]
        fn test_messages() {
            assert_eq!(Rule::Required.message("name"), "name should not be empty");
            assert_eq!(Rule::String.message("name"), "name must be a string");
            assert_eq!(
                Rule::MaxLength(255).message("name"),
                "name must be shorter than or equal to 255 characters"
            );
        }
    }

    mod evaluation {
        use super::*;

        fn name_rules() -> FieldRules {
            FieldRules::new("name").required().string().max_length(255)
        }

        #[test]
        fn test_collects_every_failure() {
            let mut errors = FieldsErrors::new();
            name_rules().evaluate(Some(&Value::Null), &mut errors);
            assert_eq!(
                errors.get("name").unwrap(),
                [
                    "name should not be empty",
                    "name must be a string",
                    "name must be shorter than or equal to 255 characters",
                ]
            );
        }

        #[test]
        fn test_passing_field_is_omitted() {
            let mut errors = FieldsErrors::new();
            name_rules().evaluate(Some(&json!("Movie")), &mut errors);
            assert!(errors.is_empty());
        }

        #[test]
        fn test_optional_skips_null_and_absent() {
            let rules = FieldRules::new("description").optional().string();
            let mut errors = FieldsErrors::new();
            rules.evaluate(None, &mut errors);
            rules.evaluate(Some(&Value::Null), &mut errors);
            assert!(errors.is_empty());

            rules.evaluate(Some(&json!(8)), &mut errors);
            assert_eq!(
                errors.get("description").unwrap(),
                ["description must be a string"]
            );
        }

        #[test]
        fn test_rule_set_checks_every_field() {
            let rules = RuleSet::new()
                .field(name_rules())
                .field(FieldRules::new("description").optional().string());

            let errors = rules.check(&json!({ "name": "", "description": 8 }));
            let fields: Vec<_> = errors.fields().collect();
            assert_eq!(fields, ["name", "description"]);
            assert_eq!(errors.get("name").unwrap(), ["name should not be empty"]);

            assert!(rules.check(&json!({ "name": "Movie" })).is_empty());
        }

        #[test]
        fn test_non_object_data_means_absent_fields() {
            let rules = RuleSet::new().field(name_rules());
            let errors = rules.check(&json!("Movie"));
            assert_eq!(errors.get("name").unwrap().len(), 3);
        }
    }
}
