//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain modeling vocabulary:
//! - Value object equality ([`value_object::ValueObject`])
//! - The entity contract ([`entity::Entity`])
//! - Typed identity value objects ([`id::Id`])
//! - Injectable side effects (identifier generation, clock)
//! - The declarative field validation engine and its error type
//! - Error classification shared by every bounded context
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod clock;
pub mod entity;
pub mod error {
    pub mod kind;
}
pub mod id;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod validation;
pub mod value_object;
