//! Fields Errors
//!
//! Ordered mapping from field name to violation messages.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Field → messages map that keeps insertion order
///
/// Serializes as a JSON object, e.g.
/// `{"name": ["name should not be empty", "name must be a string"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldsErrors {
    entries: Vec<(String, Vec<String>)>,
}

impl FieldsErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` to `field`, creating the entry on first use
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(name, _)| name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((field.to_string(), vec![message])),
        }
    }

    /// Messages recorded for `field`
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    #[inline]
    pub fn contains_field(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of invalid fields
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Invalid field names, in evaluation order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }
}

impl fmt::Display for FieldsErrors {
    /// `name: msg1, msg2; description: msg3`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (field, messages)) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {}", messages.join(", "))?;
        }
        Ok(())
    }
}

impl Serialize for FieldsErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

impl<F, M> FromIterator<(F, M)> for FieldsErrors
where
    F: AsRef<str>,
    M: IntoIterator,
    M::Item: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, M)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, messages) in iter {
            for message in messages {
                errors.push(field.as_ref(), message);
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FieldsErrors {
        let mut errors = FieldsErrors::new();
        errors.push("name", "name should not be empty");
        errors.push("description", "description must be a string");
        errors.push("name", "name must be a string");
        errors
    }

    #[test]
    fn test_push_groups_by_field() {
        let errors = sample();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get("name").unwrap(),
            ["name should not be empty", "name must be a string"]
        );
        assert_eq!(
            errors.get("description").unwrap(),
            ["description must be a string"]
        );
        assert!(errors.get("is_active").is_none());
    }

    #[test]
    fn test_keeps_insertion_order() {
        let fields: Vec<_> = sample().fields().map(str::to_string).collect();
        assert_eq!(fields, ["name", "description"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "name: name should not be empty, name must be a string; \
             description: description must be a string"
        );
        assert_eq!(FieldsErrors::new().to_string(), "");
    }

    #[test]
    fn test_serialize_as_ordered_object() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"name":["name should not be empty","name must be a string"],"description":["description must be a string"]}"#
        );
    }

    #[test]
    fn test_from_iter() {
        let errors: FieldsErrors = [("name", vec!["a", "b"])].into_iter().collect();
        assert_eq!(errors.get("name").unwrap(), ["a", "b"]);
    }
}
