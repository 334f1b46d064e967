//! Core types: Record, AddressBook, field values, Note, Tag

mod birthday;
pub mod birthdays;
mod book;
mod email;
mod error;
mod note;
mod phone;
mod record;
mod tag;

pub use birthday::Birthday;
pub use birthdays::{BirthdaySchedule, NO_UPCOMING_BIRTHDAYS, UpcomingBirthday};
pub use book::{AddressBook, NoteMatch};
pub use email::Email;
pub use error::{ContactError, ErrorKind};
pub use note::Note;
pub use phone::Phone;
pub use record::Record;
pub use tag::Tag;
