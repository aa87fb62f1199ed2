//! Entity - identity + continuity across state changes
//!
//! Entities are compared by identity, never by their mutable fields.

use crate::value_object::ValueObject;

/// Object with a stable identity across mutations
pub trait Entity {
    /// Strongly-typed identity
    type Id: ValueObject + Clone + Eq + std::hash::Hash;

    fn entity_id(&self) -> &Self::Id;

    /// Same entity, whatever its current field values
    fn same_identity_as(&self, other: &Self) -> bool {
        self.entity_id() == other.entity_id()
    }
}
