//! Catalog Backend Module
//!
//! Structure:
//! - `domain/` - the `Category` aggregate, its identity and validation rules
//! - `config` - tunable limits for the rule table
//! - `error` - crate error type mapped onto the kernel classification
//!
//! ## Invariants
//! - `Category::create` and the content mutators (`change_name`,
//!   `change_description`) run exactly one validation pass each
//! - A failed content change leaves the entity untouched
//! - `activate` / `deactivate` never validate
//! - `Category::new` rebuilds trusted data without validating

pub mod config;
pub mod domain;
pub mod error;


// Re-exports for convenience
pub use config::CategoryConfig;
pub use domain::{
    Category, CategoryCreateCommand, CategoryFields, CategoryId, CategoryProps, CategoryRules,
    CategoryValidator,
};
pub use error::{CategoryError, CategoryResult};

// Re-export kernel types that appear in this crate's signatures
pub use kernel::error::kind::ErrorKind;
pub use kernel::id::InvalidIdError;
pub use kernel::validation::{EntityValidationError, FieldsErrors};
