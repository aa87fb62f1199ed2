//! Domain Layer
//!
//! Contains the category aggregate, its identity, and its validation rules.

pub mod entity;
pub mod validator;
pub mod value_object;

// Re-exports
pub use entity::category::{Category, CategoryCreateCommand, CategoryProps};
pub use validator::{CategoryFields, CategoryRules, CategoryValidator};
pub use value_object::category_id::CategoryId;
