//! Email address with a minimal shape check.

use crate::domain::ContactError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// Anchored at the start only: anything may follow the top-level domain.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email pattern is valid"));

/// An email address of the shape `local@domain.tld`.
///
/// # Examples
///
/// ```
/// use contacts::domain::Email;
///
/// assert!(Email::new("ann@example.com").is_ok());
/// assert!(Email::new("ann@example").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Creates an email address after checking its shape.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidEmail` if there is no `x@y.z` prefix.
    pub fn new(value: &str) -> Result<Self, ContactError> {
        if !EMAIL_PATTERN.is_match(value) {
            return Err(ContactError::InvalidEmail(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email(\"{}\")", self.0)
    }
}

impl FromStr for Email {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
