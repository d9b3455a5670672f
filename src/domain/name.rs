//! PersonName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's name: alphabetic characters only, stored capitalized.
///
/// # Example
///
/// ```
/// use contact_book::domain::PersonName;
///
/// let name = PersonName::new("bILL").unwrap();
/// assert_eq!(name.as_str(), "Bill");
/// assert!(PersonName::new("Bill Gates").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName, validating and capitalizing the input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the input is empty or
    /// contains anything other than alphabetic characters.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.is_empty() || !name.chars().all(char::is_alphabetic) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(Self::capitalize(&name)))
    }

    /// Replace the stored name, re-running validation and normalization.
    pub fn set(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::new(name)?;
        Ok(())
    }

    /// Uppercase the first character and lowercase the rest.
    ///
    /// No validation happens here; address book lookups use this to derive a
    /// key from arbitrary caller input.
    pub fn capitalize(raw: &str) -> String {
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PersonName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PersonName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
