//! Common ID Types
//!
//! Type-safe identity value objects for domain entities.
//!
//! An [`Id`] holds the exact textual UUID it was built from. Any RFC version
//! (1-8) is accepted on input, as are the nil and max UUIDs; freshly
//! generated identifiers are random (v4).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::{Uuid, Variant};

use crate::value_object::ValueObject;

/// Length of the canonical hyphenated form (8-4-4-4-12)
const UUID_TEXT_LENGTH: usize = 36;

/// Byte offsets of the hyphens in the canonical form
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when a string is not a valid UUID
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ID must be a valid UUID (got {value:?})")]
pub struct InvalidIdError {
    value: String,
}

impl InvalidIdError {
    /// The rejected input
    pub fn value(&self) -> &str {
        &self.value
    }
}

// ============================================================================
// Validity predicate
// ============================================================================

/// Check whether `candidate` is a UUID in canonical textual form
///
/// Hex digits may be upper or lower case. Besides the nil and max UUIDs,
/// only RFC variant identifiers with a version in `1..=8` pass.
pub fn is_valid_uuid(candidate: &str) -> bool {
    if candidate.len() != UUID_TEXT_LENGTH {
        return false;
    }

    let well_formed = candidate.char_indices().all(|(pos, ch)| {
        if HYPHEN_POSITIONS.contains(&pos) {
            ch == '-'
        } else {
            ch.is_ascii_hexdigit()
        }
    });
    if !well_formed {
        return false;
    }

    match Uuid::try_parse(candidate) {
        Ok(uuid) if uuid.is_nil() || uuid.as_u128() == u128::MAX => true,
        Ok(uuid) => {
            uuid.get_variant() == Variant::RFC4122 && (1..=8).contains(&uuid.get_version_num())
        }
        Err(_) => false,
    }
}

// ============================================================================
// Generators
// ============================================================================

/// Source of fresh identifiers
pub trait IdGenerator {
    fn next_uuid(&self) -> Uuid;
}

/// Random (v4) identifiers
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    #[inline]
    fn next_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Always yields the same identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIdGenerator(Uuid);

impl FixedIdGenerator {
    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl IdGenerator for FixedIdGenerator {
    #[inline]
    fn next_uuid(&self) -> Uuid {
        self.0
    }
}

// ============================================================================
// Id Value Object
// ============================================================================

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::Id;
///
/// pub struct Category;
/// type CategoryId = Id<Category>;
///
/// let id = CategoryId::parse("432eda03-5e3b-4f83-82d9-de0042287b8d").unwrap();
/// assert_eq!(id.as_str(), "432eda03-5e3b-4f83-82d9-de0042287b8d");
/// assert!(CategoryId::parse("invalid-uuid").is_err());
/// ```
pub struct Id<T> {
    value: String,
    uuid: Uuid,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        let uuid = Uuid::new_v4();
        Self {
            value: uuid.hyphenated().to_string(),
            uuid,
            _marker: PhantomData,
        }
    }

    /// Validate and wrap an existing UUID string
    ///
    /// The string is kept verbatim, so `parse(s)?.as_str() == s`.
    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidIdError> {
        let value = value.into();
        if !is_valid_uuid(&value) {
            return Err(InvalidIdError { value });
        }
        let uuid = Uuid::try_parse(&value).map_err(|_| InvalidIdError {
            value: value.clone(),
        })?;
        Ok(Self {
            value,
            uuid,
            _marker: PhantomData,
        })
    }

    /// Draw an ID from `generator`
    ///
    /// Generated values go through the same predicate as parsed ones.
    pub fn generate(generator: &dyn IdGenerator) -> Result<Self, InvalidIdError> {
        Self::parse(generator.next_uuid().hyphenated().to_string())
    }

    /// Get the textual form
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the underlying UUID
    #[inline]
    pub fn as_uuid(&self) -> &Uuid {
        &self.uuid
    }

    /// Convert to the textual form
    #[inline]
    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            uuid: self.uuid,
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: 'static> ValueObject for Id<T> {}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<T> FromStr for Id<T> {
    type Err = InvalidIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = InvalidIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl<T> TryFrom<&str> for Id<T> {
    type Error = InvalidIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl<T> From<Id<T>> for String {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(value).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
