//! Field Validation
//!
//! A declarative, exhaustive validation engine:
//! - [`rule::FieldRules`] / [`rule::RuleSet`] - per-field ordered rule tables
//! - [`validator::RuleValidator`] - runs a rule set against a JSON data bag
//! - [`fields_errors::FieldsErrors`] - field → messages, in evaluation order
//! - [`error::EntityValidationError`] - the failure carrying the whole map
//!
//! Every rule of every field is evaluated; nothing short-circuits.

pub mod error;
pub mod fields_errors;
pub mod rule;
pub mod validator;

pub use error::EntityValidationError;
pub use fields_errors::FieldsErrors;
pub use rule::{FieldRules, Rule, RuleSet};
pub use validator::{RuleValidator, ValidatorFields};
