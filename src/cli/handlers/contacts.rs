//! Contact-level handlers (add-contact, remove-contact, all, show).

use anyhow::Result;
use tracing::info;

use super::format_contact;
use crate::cli::output::{ContactListing, Output, OutputFormat};
use crate::cli::{AllArgs, ContactArgs, ShowArgs};
use crate::domain::{AddressBook, ContactError, Record};

pub fn handle_add_contact(args: &ContactArgs, book: &mut AddressBook) -> Result<String> {
    let record = Record::new(args.name.as_str())?;
    if book.find(record.name()).is_some() {
        return Err(ContactError::ContactExists(record.name().to_string()).into());
    }

    let message = format!("Contact '{}' added.", record.name());
    info!(contact = record.name(), "added contact");
    book.add_record(record);
    Ok(message)
}

pub fn handle_remove_contact(args: &ContactArgs, book: &mut AddressBook) -> Result<String> {
    let removed = book
        .delete(&args.name)
        .ok_or_else(|| ContactError::ContactNotFound(args.name.trim().to_string()))?;

    info!(contact = removed.name(), "removed contact");
    Ok(format!("Contact '{}' removed.", removed.name()))
}

pub fn handle_all(args: &AllArgs, book: &AddressBook) -> Result<String> {
    match args.format {
        OutputFormat::Human => {
            if book.is_empty() {
                return Ok("No contacts available.".to_string());
            }
            let blocks: Vec<String> = book.records().map(format_contact).collect();
            Ok(format!(
                "{}\n\n{} contact(s)",
                blocks.join("\n\n"),
                book.len()
            ))
        }
        OutputFormat::Json => {
            let listings: Vec<ContactListing> = book.records().map(ContactListing::from).collect();
            Ok(Output::new(listings).to_json()?)
        }
    }
}

pub fn handle_show(args: &ShowArgs, book: &AddressBook) -> Result<String> {
    let record = book.require(&args.name)?;
    match args.format {
        OutputFormat::Human => Ok(format_contact(record)),
        OutputFormat::Json => Ok(Output::new(ContactListing::from(record)).to_json()?),
    }
}
