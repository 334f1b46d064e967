//! A single contact and its field-level operations.

use crate::domain::{Birthday, ContactError, Email, Note, Phone, Tag};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// One contact: a name plus phones, an optional address and birthday,
/// emails and notes.
///
/// A record starts with a name only and is filled in by the `add_*`
/// operations. Every operation validates its input before touching the
/// record, so a failed call leaves the record unchanged.
///
/// # Examples
///
/// ```
/// use contacts::domain::Record;
///
/// let mut record = Record::new("Ann").unwrap();
/// record.add_phone("0501234567").unwrap();
/// record.add_birthday("15.06.1990").unwrap();
/// assert_eq!(record.phones().len(), 1);
/// assert!(record.add_phone("123").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    birthday: Option<Birthday>,
    #[serde(default)]
    emails: Vec<Email>,
    #[serde(default)]
    notes: Vec<Note>,
}

impl Record {
    /// Creates an empty record. The name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::EmptyName` if the name is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, ContactError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ContactError::EmptyName);
        }

        Ok(Self {
            name: trimmed.to_string(),
            phones: Vec::new(),
            address: None,
            birthday: None,
            emails: Vec::new(),
            notes: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ===========================================
    // Phones
    // ===========================================

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Appends a phone after validating it.
    pub fn add_phone(&mut self, value: &str) -> Result<(), ContactError> {
        let phone = Phone::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replaces the first phone equal to `old` with `new`.
    ///
    /// Returns `Ok(false)` when no phone equals `old`. `new` is validated
    /// even in that case.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ContactError> {
        let replacement = Phone::new(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(phone) => {
                *phone = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes every phone equal to `value`. Returns how many were removed.
    pub fn remove_phone(&mut self, value: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != value);
        before - self.phones.len()
    }

    // ===========================================
    // Birthday
    // ===========================================

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Sets the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, value: &str) -> Result<(), ContactError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    // ===========================================
    // Address
    // ===========================================

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Sets the address. Fails if one is already set.
    pub fn add_address(&mut self, value: impl Into<String>) -> Result<(), ContactError> {
        if self.address.is_some() {
            return Err(ContactError::AddressExists);
        }
        self.address = Some(value.into());
        Ok(())
    }

    /// Replaces the address. Fails if none is set.
    pub fn edit_address(&mut self, value: impl Into<String>) -> Result<(), ContactError> {
        match self.address.as_mut() {
            Some(address) => {
                *address = value.into();
                Ok(())
            }
            None => Err(ContactError::NoAddress),
        }
    }

    pub fn remove_address(&mut self) {
        self.address = None;
    }

    // ===========================================
    // Emails
    // ===========================================

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    /// Appends an email after validating it. Duplicates are kept.
    pub fn add_email(&mut self, value: &str) -> Result<(), ContactError> {
        let email = Email::new(value)?;
        self.emails.push(email);
        Ok(())
    }

    /// Removes the first email equal to `value`. Returns `false` if absent.
    pub fn remove_email(&mut self, value: &str) -> bool {
        match self.emails.iter().position(|e| e.as_str() == value) {
            Some(index) => {
                self.emails.remove(index);
                true
            }
            None => false,
        }
    }

    // ===========================================
    // Notes
    // ===========================================

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Looks up a note by title.
    pub fn note(&self, title: &str) -> Result<&Note, ContactError> {
        self.notes
            .iter()
            .find(|n| n.title() == title)
            .ok_or_else(|| ContactError::NoteNotFound(title.to_string()))
    }

    fn note_mut(&mut self, title: &str) -> Result<&mut Note, ContactError> {
        self.notes
            .iter_mut()
            .find(|n| n.title() == title)
            .ok_or_else(|| ContactError::NoteNotFound(title.to_string()))
    }

    /// Adds a note. Titles are unique per contact.
    pub fn add_note(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<(), ContactError> {
        let title = title.into();
        if self.notes.iter().any(|n| n.title() == title) {
            return Err(ContactError::NoteExists(title));
        }
        self.notes.push(Note::new(title, body));
        Ok(())
    }

    /// Replaces the body of an existing note.
    pub fn edit_note(&mut self, title: &str, body: impl Into<String>) -> Result<(), ContactError> {
        self.note_mut(title)?.set_body(body);
        Ok(())
    }

    /// Deletes a note.
    pub fn remove_note(&mut self, title: &str) -> Result<Note, ContactError> {
        let index = self
            .notes
            .iter()
            .position(|n| n.title() == title)
            .ok_or_else(|| ContactError::NoteNotFound(title.to_string()))?;
        Ok(self.notes.remove(index))
    }

    /// Adds tags to a note. Returns how many were new.
    pub fn add_tag(
        &mut self,
        title: &str,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Result<usize, ContactError> {
        Ok(self.note_mut(title)?.add_tags(tags))
    }

    /// Removes a tag from a note. Returns `false` if the note lacked it.
    pub fn remove_tag(&mut self, title: &str, tag: &Tag) -> Result<bool, ContactError> {
        Ok(self.note_mut(title)?.remove_tag(tag))
    }

    /// Returns the notes sharing at least one tag with `tags`, in list order.
    pub fn search_notes_by_tags(&self, tags: impl IntoIterator<Item = Tag>) -> Vec<&Note> {
        let query: BTreeSet<Tag> = tags.into_iter().collect();
        self.notes
            .iter()
            .filter(|n| n.matching_tags(&query) > 0)
            .collect()
    }

    /// Reorders notes by how many of `tags` they carry, most first.
    ///
    /// The sort is stable: notes with equal counts keep their order.
    pub fn sort_notes_by_tags(&mut self, tags: impl IntoIterator<Item = Tag>) {
        let query: BTreeSet<Tag> = tags.into_iter().collect();
        self.notes.sort_by_key(|n| Reverse(n.matching_tags(&query)));
    }
}
