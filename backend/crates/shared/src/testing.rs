//! Test helpers
//!
//! Enabled for this crate's own tests and, for other crates, through the
//! `testing` feature.

use crate::validation::{FieldsErrors, RuleValidator, ValidatorFields};

/// Assert that `actual` contains every expected field with exactly the
/// expected messages
///
/// Fields missing from `expected` are ignored, so a test can focus on one
/// field of a multi-field failure.
#[track_caller]
pub fn assert_contains_error_messages(actual: &FieldsErrors, expected: &[(&str, &[&str])]) {
    for (field, messages) in expected {
        let found = actual.get(field);
        let matches = found.is_some_and(|found| found == *messages);
        assert!(
            matches,
            "The validation errors do not contain {field}: {messages:?}. Current: {}",
            serde_json::to_string(actual).unwrap_or_else(|_| actual.to_string()),
        );
    }
}

/// Run `validator` on `data` and assert it fails with the expected messages
#[track_caller]
pub fn assert_rejects(
    validator: &mut RuleValidator,
    data: &serde_json::Value,
    expected: &[(&str, &[&str])],
) {
    assert!(
        !validator.validate(data),
        "expected {data} to be rejected, but it passed validation"
    );
    let errors = validator.errors().cloned().unwrap_or_default();
    assert_contains_error_messages(&errors, expected);
}
