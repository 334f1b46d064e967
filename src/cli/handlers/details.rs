//! Birthday, address and email handlers.

use anyhow::Result;
use tracing::info;

use super::join_words;
use crate::cli::{AddressArgs, BirthdayArgs, ContactArgs, EmailArgs};
use crate::domain::{AddressBook, ContactError};

// ===========================================
// Birthday
// ===========================================

pub fn handle_add_birthday(args: &BirthdayArgs, book: &mut AddressBook) -> Result<String> {
    book.require_mut(&args.name)?.add_birthday(&args.birthday)?;
    info!(contact = %args.name, "set birthday");
    Ok("Birthday added.".to_string())
}

pub fn handle_show_birthday(args: &ContactArgs, book: &AddressBook) -> Result<String> {
    let record = book.require(&args.name)?;
    let birthday = record
        .birthday()
        .ok_or_else(|| ContactError::NoBirthday(record.name().to_string()))?;
    Ok(birthday.to_string())
}

// ===========================================
// Address
// ===========================================

pub fn handle_add_address(args: &AddressArgs, book: &mut AddressBook) -> Result<String> {
    let record = book.require_mut(&args.name)?;
    record.add_address(join_words(&args.address, "address")?)?;
    info!(contact = %args.name, "added address");
    Ok("Address added.".to_string())
}

pub fn handle_edit_address(args: &AddressArgs, book: &mut AddressBook) -> Result<String> {
    let record = book.require_mut(&args.name)?;
    record.edit_address(join_words(&args.address, "address")?)?;
    info!(contact = %args.name, "updated address");
    Ok("Address updated.".to_string())
}

pub fn handle_remove_address(args: &ContactArgs, book: &mut AddressBook) -> Result<String> {
    book.require_mut(&args.name)?.remove_address();
    info!(contact = %args.name, "removed address");
    Ok("Address removed.".to_string())
}

// ===========================================
// Emails
// ===========================================

pub fn handle_add_email(args: &EmailArgs, book: &mut AddressBook) -> Result<String> {
    book.require_mut(&args.name)?.add_email(&args.email)?;
    info!(contact = %args.name, "added email");
    Ok("Email added.".to_string())
}

pub fn handle_remove_email(args: &EmailArgs, book: &mut AddressBook) -> Result<String> {
    if book.require_mut(&args.name)?.remove_email(&args.email) {
        info!(contact = %args.name, "removed email");
        Ok("Email removed.".to_string())
    } else {
        Ok(format!("Email {} not found.", args.email))
    }
}

pub fn handle_show_emails(args: &ContactArgs, book: &AddressBook) -> Result<String> {
    let record = book.require(&args.name)?;
    if record.emails().is_empty() {
        return Ok("No emails available.".to_string());
    }
    let emails: Vec<&str> = record.emails().iter().map(|e| e.as_str()).collect();
    Ok(emails.join("\n"))
}
