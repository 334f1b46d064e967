//! Command handlers for the CLI.
//!
//! Handlers work on an already-loaded [`AddressBook`] and return the text to
//! print. Loading and saving happen once, in [`crate::run`].

mod birthdays;
mod completions;
mod contacts;
mod details;
mod notes;
mod phones;


use crate::domain::{ContactError, Record, Tag};

// Re-export public items
pub use birthdays::handle_birthdays;
pub use completions::handle_completions;
pub use contacts::{handle_add_contact, handle_all, handle_remove_contact, handle_show};
pub use details::{
    handle_add_address, handle_add_birthday, handle_add_email, handle_edit_address,
    handle_remove_address, handle_remove_email, handle_show_birthday, handle_show_emails,
};
pub use notes::{
    handle_add_note, handle_add_tag, handle_edit_note, handle_remove_note, handle_remove_tag,
    handle_search_by_tags, handle_search_note, handle_sort_notes,
};
pub use phones::{handle_add_phone, handle_edit_phone, handle_remove_phone, handle_show_phones};

// ===========================================
// Shared Utilities
// ===========================================

/// Joins free-text words from the command line, rejecting empty text.
pub(crate) fn join_words(words: &[String], what: &str) -> Result<String, ContactError> {
    let text = words.join(" ").trim().to_string();
    if text.is_empty() {
        return Err(ContactError::MalformedInput(format!("{} cannot be empty", what)));
    }
    Ok(text)
}

/// Parses tag arguments.
pub(crate) fn parse_tags(values: &[String]) -> Result<Vec<Tag>, ContactError> {
    values.iter().map(|v| Tag::new(v)).collect()
}

/// Renders a contact as an indented block for human output.
pub(crate) fn format_contact(record: &Record) -> String {
    let mut lines = vec![record.name().to_string()];

    if !record.phones().is_empty() {
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        lines.push(format!("  phones:   {}", phones.join(", ")));
    }
    if let Some(address) = record.address() {
        lines.push(format!("  address:  {}", address));
    }
    if let Some(birthday) = record.birthday() {
        lines.push(format!("  birthday: {}", birthday));
    }
    if !record.emails().is_empty() {
        let emails: Vec<&str> = record.emails().iter().map(|e| e.as_str()).collect();
        lines.push(format!("  emails:   {}", emails.join(", ")));
    }
    for note in record.notes() {
        if note.tags().is_empty() {
            lines.push(format!("  note:     {}", note));
        } else {
            let tags: Vec<&str> = note.tags().iter().map(Tag::as_str).collect();
            lines.push(format!("  note:     {} [{}]", note, tags.join(", ")));
        }
    }

    lines.join("\n")
}
