//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{NoteMatch, Record, UpcomingBirthday, birthdays::weekday_name};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Renders the wrapper as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A contact in listing output.
#[derive(Debug, Serialize)]
pub struct ContactListing {
    pub name: String,
    pub phones: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    pub emails: Vec<String>,
    pub notes: Vec<NoteListing>,
}

impl From<&Record> for ContactListing {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            phones: record.phones().iter().map(|p| p.to_string()).collect(),
            address: record.address().map(str::to_string),
            birthday: record.birthday().map(|b| b.to_string()),
            emails: record.emails().iter().map(|e| e.to_string()).collect(),
            notes: record
                .notes()
                .iter()
                .map(|n| NoteListing {
                    title: n.title().to_string(),
                    body: n.body().to_string(),
                    tags: n.tags().iter().map(|t| t.to_string()).collect(),
                })
                .collect(),
        }
    }
}

/// A note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

/// A note found by title, with its contact.
#[derive(Debug, Serialize)]
pub struct NoteMatchListing {
    pub contact: String,
    pub title: String,
    pub body: String,
}

impl From<NoteMatch> for NoteMatchListing {
    fn from(found: NoteMatch) -> Self {
        Self {
            contact: found.contact,
            title: found.title,
            body: found.body,
        }
    }
}

/// An upcoming birthday.
#[derive(Debug, Serialize)]
pub struct BirthdayListing {
    pub name: String,
    /// ISO date of the anniversary
    pub date: String,
    pub days_until: i64,
    pub celebrate_on: &'static str,
}

impl From<&UpcomingBirthday> for BirthdayListing {
    fn from(upcoming: &UpcomingBirthday) -> Self {
        Self {
            name: upcoming.name.clone(),
            date: upcoming.date.format("%Y-%m-%d").to_string(),
            days_until: upcoming.days_until,
            celebrate_on: weekday_name(upcoming.celebrate_on),
        }
    }
}
