//! Phone handlers.

use anyhow::Result;
use tracing::info;

use crate::cli::{ContactArgs, EditPhoneArgs, PhoneArgs};
use crate::domain::AddressBook;

pub fn handle_add_phone(args: &PhoneArgs, book: &mut AddressBook) -> Result<String> {
    book.require_mut(&args.name)?.add_phone(&args.phone)?;
    info!(contact = %args.name, "added phone");
    Ok("Phone added.".to_string())
}

pub fn handle_edit_phone(args: &EditPhoneArgs, book: &mut AddressBook) -> Result<String> {
    let replaced = book
        .require_mut(&args.name)?
        .edit_phone(&args.old, &args.new)?;

    if replaced {
        info!(contact = %args.name, "updated phone");
        Ok("Phone updated.".to_string())
    } else {
        Ok(format!("Phone {} not found for '{}'.", args.old, args.name.trim()))
    }
}

pub fn handle_remove_phone(args: &PhoneArgs, book: &mut AddressBook) -> Result<String> {
    let removed = book.require_mut(&args.name)?.remove_phone(&args.phone);

    if removed > 0 {
        info!(contact = %args.name, removed, "removed phone");
        Ok("Phone removed.".to_string())
    } else {
        Ok(format!("Phone {} not found for '{}'.", args.phone, args.name.trim()))
    }
}

pub fn handle_show_phones(args: &ContactArgs, book: &AddressBook) -> Result<String> {
    let record = book.require(&args.name)?;
    if record.phones().is_empty() {
        return Ok("No phone numbers available.".to_string());
    }
    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    Ok(phones.join("\n"))
}
