//! The address book: all contacts keyed by name.

use crate::domain::birthdays::{BirthdaySchedule, UpcomingBirthday, collect_upcoming};
use crate::domain::{ContactError, Record};
use crate::infra::{StorageError, read_book, write_book};
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;
use std::path::Path;

/// A note found by [`AddressBook::search_note`], with its owning contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteMatch {
    pub title: String,
    pub body: String,
    pub contact: String,
}

/// All contacts, keyed by name.
///
/// Iteration is in ascending name order. Keys always equal the name of the
/// record stored under them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record under its name, replacing any record already there.
    ///
    /// Returns the replaced record. Callers wanting "already exists"
    /// semantics check [`find`](Self::find) first.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name().to_string(), record)
    }

    /// Looks up a record. The name is trimmed, as in [`Record::new`].
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name.trim())
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name.trim())
    }

    /// Looks up a record, failing with `ContactNotFound` when absent.
    pub fn require(&self, name: &str) -> Result<&Record, ContactError> {
        self.find(name)
            .ok_or_else(|| ContactError::ContactNotFound(name.trim().to_string()))
    }

    /// Mutable form of [`require`](Self::require).
    pub fn require_mut(&mut self, name: &str) -> Result<&mut Record, ContactError> {
        self.find_mut(name)
            .ok_or_else(|| ContactError::ContactNotFound(name.trim().to_string()))
    }

    /// Removes a record. Removing an unknown name is a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name.trim())
    }

    /// Iterates records in name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds a note by title across all contacts.
    ///
    /// When several contacts have a note with this title, the last contact
    /// in name order wins.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::NoteNotFound` if no contact has such a note.
    pub fn search_note(&self, title: &str) -> Result<NoteMatch, ContactError> {
        self.records()
            .filter_map(|record| {
                record.note(title).ok().map(|note| NoteMatch {
                    title: note.title().to_string(),
                    body: note.body().to_string(),
                    contact: record.name().to_string(),
                })
            })
            .last()
            .ok_or_else(|| ContactError::NoteNotFound(title.to_string()))
    }

    /// Groups the birthdays of the next `days` days (inclusive) by the
    /// weekday they are celebrated on, counting from the local date.
    pub fn get_birthdays_days_interval(&self, days: u32) -> BirthdaySchedule {
        self.get_birthdays_days_interval_from(Local::now().date_naive(), days)
    }

    /// Same as [`get_birthdays_days_interval`](Self::get_birthdays_days_interval)
    /// with an explicit `today`.
    pub fn get_birthdays_days_interval_from(&self, today: NaiveDate, days: u32) -> BirthdaySchedule {
        BirthdaySchedule::from_upcoming(&collect_upcoming(self.records(), today, days))
    }

    /// Lists the birthdays of the next `days` days, soonest first.
    ///
    /// Ties are broken by contact name.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        let mut upcoming = collect_upcoming(self.records(), today, days);
        upcoming.sort_by_key(|u| u.days_until);
        upcoming
    }

    /// Renders the birthday schedule, one weekday per line.
    ///
    /// Returns `No upcoming birthdays.` when the window is empty.
    pub fn birthdays(&self, days: u32) -> String {
        self.get_birthdays_days_interval(days).to_string()
    }

    /// Writes the whole book to `path`, atomically replacing the file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), StorageError> {
        write_book(path, self)
    }

    /// Replaces the contents of this book with the book stored at `path`.
    ///
    /// A missing file leaves the book empty.
    pub fn load_from_file(&mut self, path: &Path) -> Result<(), StorageError> {
        *self = read_book(path)?;
        Ok(())
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
