//! Case-insensitive tag type for labelling contact notes.

use crate::domain::ContactError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A case-insensitive label attached to a note.
///
/// Tags are normalized to lowercase, so `Work`, `work` and `WORK` are the
/// same tag.
///
/// # Validation Rules
/// - Non-empty after trimming
/// - No interior whitespace
///
/// # Examples
///
/// ```
/// use contacts::domain::Tag;
///
/// let tag = Tag::new("Work").unwrap();
/// assert_eq!(tag.as_str(), "work");
/// assert_eq!(tag, Tag::new("WORK").unwrap());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String); // Always stored lowercase

impl Tag {
    /// Creates a new Tag from a string.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidTag` if the tag is empty after trimming
    /// or contains whitespace.
    pub fn new(s: &str) -> Result<Self, ContactError> {
        let normalized = s.trim().to_lowercase();

        if normalized.is_empty() || normalized.chars().any(char::is_whitespace) {
            return Err(ContactError::InvalidTag(s.to_string()));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized tag value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
