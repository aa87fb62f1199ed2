//! Value Object - equality by value, not identity
//!
//! Implementors compare through their own `PartialEq`, which is expected to
//! be field-by-field (usually derived). [`ValueObject::equals`] adds the
//! "absent or foreign type is never equal" rule on top.

use std::any::Any;
use std::fmt;

/// Immutable data holder compared structurally.
///
/// ## Examples
/// ```rust
/// use kernel::value_object::ValueObject;
///
/// #[derive(Debug, PartialEq)]
/// struct Money { amount: i64, currency: &'static str }
/// impl ValueObject for Money {}
///
/// let a = Money { amount: 10, currency: "EUR" };
/// let b = Money { amount: 10, currency: "EUR" };
/// assert!(a.equals(Some(&b)));
/// assert!(!a.equals(None));
/// assert!(!a.equals(Some(&"EUR")));
/// ```
pub trait ValueObject: PartialEq + fmt::Debug + 'static {
    /// Structural comparison against a possibly absent, possibly foreign value
    fn equals(&self, other: Option<&dyn Any>) -> bool
    where
        Self: Sized,
    {
        other
            .and_then(|other| other.downcast_ref::<Self>())
            .is_some_and(|other| self == other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct SimpleValueObject {
        value: String,
    }

    impl ValueObject for SimpleValueObject {}

    #[derive(Debug, PartialEq)]
    struct ComplexValueObject {
        value: String,
        description: String,
    }

    impl ValueObject for ComplexValueObject {}

    fn simple(value: &str) -> SimpleValueObject {
        SimpleValueObject {
            value: value.to_string(),
        }
    }

    fn complex(value: &str, description: &str) -> ComplexValueObject {
        ComplexValueObject {
            value: value.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_equal_when_fields_match() {
        assert!(simple("test").equals(Some(&simple("test"))));
        assert!(complex("test", "test").equals(Some(&complex("test", "test"))));
    }

    #[test]
    fn test_reflexive() {
        let object = complex("test", "other");
        assert!(object.equals(Some(&object)));
    }

    #[test]
    fn test_not_equal_when_absent() {
        assert!(!simple("test").equals(None));
    }

    #[test]
    fn test_not_equal_when_any_field_differs() {
        assert!(!simple("test").equals(Some(&simple("other"))));
        assert!(!complex("test", "test").equals(Some(&complex("test", "other"))));
    }

    #[test]
    fn test_not_equal_across_types() {
        assert!(!simple("test").equals(Some(&complex("test", "other"))));
        assert!(!simple("test").equals(Some(&"test".to_string())));
    }
}
