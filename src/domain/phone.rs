//! Validated phone number.

use crate::domain::ContactError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

/// A phone number of exactly ten ASCII digits.
///
/// The value is stored as entered; no whitespace is trimmed and no
/// separators are accepted.
///
/// # Examples
///
/// ```
/// use contacts::domain::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
///
/// assert!(Phone::new("050-123-45-67").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Creates a phone number after checking it is exactly ten digits.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidPhone` for any other input.
    pub fn new(value: &str) -> Result<Self, ContactError> {
        if !PHONE_PATTERN.is_match(value) {
            return Err(ContactError::InvalidPhone(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phone(\"{}\")", self.0)
    }
}

impl FromStr for Phone {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
