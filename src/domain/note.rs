//! Titled free-text note attached to a contact.

use crate::domain::Tag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A note kept on a contact.
///
/// The owning contact is implicit: notes only exist inside a
/// [`Record`](crate::domain::Record), which keeps titles unique.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    title: String,
    body: String,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Note {
    /// Creates an untagged note.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            tags: BTreeSet::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the note's tags in sorted order.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub(crate) fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Adds tags to the note (set union). Returns how many were new.
    pub fn add_tags(&mut self, tags: impl IntoIterator<Item = Tag>) -> usize {
        tags.into_iter()
            .map(|tag| self.tags.insert(tag))
            .filter(|inserted| *inserted)
            .count()
    }

    /// Removes a tag. Returns `false` if the note did not carry it.
    pub fn remove_tag(&mut self, tag: &Tag) -> bool {
        self.tags.remove(tag)
    }

    /// Returns how many of `query` this note is tagged with.
    pub fn matching_tags(&self, query: &BTreeSet<Tag>) -> usize {
        self.tags.intersection(query).count()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.body)
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("title", &self.title)
            .field("body", &self.body)
            .field("tags", &self.tags)
            .finish()
    }
}
