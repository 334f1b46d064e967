//! Note and tag handlers.

use anyhow::Result;
use tracing::info;

use super::{join_words, parse_tags};
use crate::cli::output::{NoteListing, NoteMatchListing, Output, OutputFormat};
use crate::cli::{
    AddTagArgs, NoteArgs, NoteRefArgs, RemoveTagArgs, SearchByTagsArgs, SearchNoteArgs,
    SortNotesArgs,
};
use crate::domain::{AddressBook, Note, Tag};

pub fn handle_add_note(args: &NoteArgs, book: &mut AddressBook) -> Result<String> {
    let body = join_words(&args.body, "note text")?;
    book.require_mut(&args.name)?.add_note(args.title.as_str(), body)?;
    info!(contact = %args.name, title = %args.title, "added note");
    Ok("Note added.".to_string())
}

pub fn handle_edit_note(args: &NoteArgs, book: &mut AddressBook) -> Result<String> {
    let body = join_words(&args.body, "note text")?;
    book.require_mut(&args.name)?.edit_note(&args.title, body)?;
    info!(contact = %args.name, title = %args.title, "updated note");
    Ok("Note updated.".to_string())
}

pub fn handle_remove_note(args: &NoteRefArgs, book: &mut AddressBook) -> Result<String> {
    book.require_mut(&args.name)?.remove_note(&args.title)?;
    info!(contact = %args.name, title = %args.title, "removed note");
    Ok("Note removed.".to_string())
}

pub fn handle_search_note(args: &SearchNoteArgs, book: &AddressBook) -> Result<String> {
    let found = book.search_note(&args.title)?;
    match args.format {
        OutputFormat::Human => Ok(format!(
            "{} (from '{}')\n  {}",
            found.title, found.contact, found.body
        )),
        OutputFormat::Json => Ok(Output::new(NoteMatchListing::from(found)).to_json()?),
    }
}

pub fn handle_add_tag(args: &AddTagArgs, book: &mut AddressBook) -> Result<String> {
    // Validate tags first (before touching the record)
    let tags = parse_tags(&args.tags)?;
    let added = book.require_mut(&args.name)?.add_tag(&args.title, tags)?;

    info!(contact = %args.name, title = %args.title, added, "tagged note");
    if added == 0 {
        Ok(format!("Note '{}' already has these tags.", args.title))
    } else {
        Ok("Tags added.".to_string())
    }
}

pub fn handle_remove_tag(args: &RemoveTagArgs, book: &mut AddressBook) -> Result<String> {
    let tag = Tag::new(&args.tag)?;
    let removed = book.require_mut(&args.name)?.remove_tag(&args.title, &tag)?;

    if removed {
        info!(contact = %args.name, title = %args.title, tag = %tag, "untagged note");
        Ok(format!("Tag '{}' removed.", tag))
    } else {
        Ok(format!("Note '{}' has no tag '{}'.", args.title, tag))
    }
}

pub fn handle_search_by_tags(args: &SearchByTagsArgs, book: &AddressBook) -> Result<String> {
    let tags = parse_tags(&args.tags)?;
    let notes = book.require(&args.name)?.search_notes_by_tags(tags);

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                return Ok("No notes found.".to_string());
            }
            let mut lines = vec!["Titles of found notes:".to_string()];
            lines.extend(notes.iter().map(|n| format!("  - {}", n.title())));
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.into_iter().map(note_listing).collect();
            Ok(Output::new(listings).to_json()?)
        }
    }
}

pub fn handle_sort_notes(args: &SortNotesArgs, book: &mut AddressBook) -> Result<String> {
    let tags = parse_tags(&args.tags)?;
    let record = book.require_mut(&args.name)?;
    record.sort_notes_by_tags(tags);
    info!(contact = %args.name, "sorted notes");

    if record.notes().is_empty() {
        return Ok(format!("'{}' has no notes.", record.name()));
    }
    let titles: Vec<&str> = record.notes().iter().map(Note::title).collect();
    Ok(format!("Notes sorted: {}", titles.join(", ")))
}

fn note_listing(note: &Note) -> NoteListing {
    NoteListing {
        title: note.title().to_string(),
        body: note.body().to_string(),
        tags: note.tags().iter().map(|t| t.to_string()).collect(),
    }
}
