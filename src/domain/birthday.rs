//! Birthday in `DD.MM.YYYY` form and its yearly recurrence.

use crate::domain::ContactError;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static BIRTHDAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday pattern is valid")
});

/// Format used to turn a birthday into a calendar date.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A birthday written as `DD.MM.YYYY`.
///
/// Only the shape is validated: two digits, a dot, two digits, a dot and four
/// digits. `31.13.2020` is accepted and stored; such a value simply has no
/// calendar date (see [`Birthday::date`]).
///
/// # Examples
///
/// ```
/// use contacts::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.as_str(), "15.06.1990");
///
/// assert!(Birthday::new("1.6.1990").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Birthday(String);

impl Birthday {
    /// Creates a birthday after checking the `DD.MM.YYYY` shape.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidBirthday` if the shape does not match.
    pub fn new(value: &str) -> Result<Self, ContactError> {
        if !BIRTHDAY_PATTERN.is_match(value) {
            return Err(ContactError::InvalidBirthday(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the birthday as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the calendar date, or `None` when the digits do not form one.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, BIRTHDAY_FORMAT).ok()
    }

    /// Returns the first anniversary on or after `today`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    /// Returns `None` when the birthday has no calendar date.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let date = self.date()?;
        let this_year = anniversary_in(date, today.year())?;
        if this_year < today {
            anniversary_in(date, today.year() + 1)
        } else {
            Some(this_year)
        }
    }
}

fn anniversary_in(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, date.month(), date.day()).or_else(|| {
        if date.month() == 2 && date.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Birthday(\"{}\")", self.0)
    }
}

impl FromStr for Birthday {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
