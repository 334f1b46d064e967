//! Versioned on-disk encoding of the address book with atomic writes.
//!
//! The file is a JSON document:
//!
//! ```json
//! { "format": "contacts-book", "version": 1, "contacts": { "<name>": { ...record... } } }
//! ```
//!
//! Field values are re-validated on load through the same constructors used
//! when they were first entered.

use crate::domain::{AddressBook, Record};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

/// Default file name of the address book.
pub const DEFAULT_BOOK_FILE: &str = "address_book.dat";

/// Value of the `format` field identifying an address book file.
pub const FORMAT_NAME: &str = "contacts-book";

/// Current encoding version.
pub const FORMAT_VERSION: u32 = 1;

/// Errors while reading or writing the address book file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode address book for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode address book at {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} is not an address book file (format '{found}')")]
    UnknownFormat { path: PathBuf, found: String },

    #[error("unsupported address book version {found} in {path} (expected {expected})")]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        expected: u32,
    },

    #[error("corrupt address book {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Serialize)]
struct BookFileRef<'a> {
    format: &'a str,
    version: u32,
    contacts: BTreeMap<&'a str, &'a Record>,
}

// Contacts stay undecoded until the header has been checked, so a newer
// version is reported as such rather than as a schema mismatch.
#[derive(Deserialize)]
struct BookFileHeader {
    format: String,
    version: u32,
    #[serde(default)]
    contacts: serde_json::Value,
}

/// Encodes the book as the bytes of a version 1 file.
pub fn encode_book(path: &Path, book: &AddressBook) -> Result<Vec<u8>, StorageError> {
    let file = BookFileRef {
        format: FORMAT_NAME,
        version: FORMAT_VERSION,
        contacts: book.records().map(|r| (r.name(), r)).collect(),
    };
    serde_json::to_vec_pretty(&file).map_err(|e| StorageError::Encode {
        path: path.into(),
        source: e,
    })
}

/// Decodes the bytes of an address book file.
///
/// # Errors
///
/// Returns `StorageError::UnknownFormat` or `StorageError::UnsupportedVersion`
/// for foreign or newer files, `StorageError::Decode` for malformed JSON or
/// invalid field values, and `StorageError::Corrupt` when a key differs from
/// its record's name or a contact repeats a note title.
pub fn decode_book(path: &Path, bytes: &[u8]) -> Result<AddressBook, StorageError> {
    let decode_err = |e| StorageError::Decode {
        path: path.into(),
        source: e,
    };

    let header: BookFileHeader = serde_json::from_slice(bytes).map_err(decode_err)?;
    if header.format != FORMAT_NAME {
        return Err(StorageError::UnknownFormat {
            path: path.into(),
            found: header.format,
        });
    }
    if header.version != FORMAT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            path: path.into(),
            found: header.version,
            expected: FORMAT_VERSION,
        });
    }

    let contacts: BTreeMap<String, Record> = if header.contacts.is_null() {
        BTreeMap::new()
    } else {
        serde_json::from_value(header.contacts).map_err(decode_err)?
    };

    for (key, record) in &contacts {
        check_record(path, key, record)?;
    }

    Ok(contacts.into_values().collect())
}

fn check_record(path: &Path, key: &str, record: &Record) -> Result<(), StorageError> {
    let corrupt = |reason: String| StorageError::Corrupt {
        path: path.into(),
        reason,
    };

    if record.name().trim().is_empty() {
        return Err(corrupt(format!("contact under '{}' has an empty name", key)));
    }
    if record.name() != record.name().trim() {
        return Err(corrupt(format!(
            "contact name '{}' has surrounding whitespace",
            record.name()
        )));
    }
    if record.name() != key {
        return Err(corrupt(format!(
            "contact stored under '{}' is named '{}'",
            key,
            record.name()
        )));
    }

    let mut titles = HashSet::new();
    for note in record.notes() {
        if !titles.insert(note.title()) {
            return Err(corrupt(format!(
                "contact '{}' has two notes titled '{}'",
                key,
                note.title()
            )));
        }
    }
    Ok(())
}

/// Reads the address book at `path`.
///
/// A missing file yields an empty book.
pub fn read_book(path: &Path) -> Result<AddressBook, StorageError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no address book file; starting empty");
            return Ok(AddressBook::new());
        }
        Err(e) => {
            return Err(StorageError::Io {
                path: path.into(),
                source: e,
            });
        }
    };

    let book = decode_book(path, &bytes)?;
    debug!(path = %path.display(), contacts = book.len(), "loaded address book");
    Ok(book)
}

/// Writes the address book to `path` atomically.
///
/// Uses a temporary file in the same directory and an atomic rename, so the
/// file holds either the previous or the new book. The parent directory must
/// exist.
///
/// # Errors
///
/// Returns `StorageError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `StorageError::AtomicWrite` if the atomic rename fails.
pub fn write_book(path: &Path, book: &AddressBook) -> Result<(), StorageError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    if !parent.is_dir() {
        return Err(StorageError::ParentNotFound {
            path: parent.into(),
        });
    }

    let content = encode_book(path, book)?;
    let mut temp = NamedTempFile::new_in(parent).map_err(|e| StorageError::Io {
        path: path.into(),
        source: e,
    })?;

    temp.write_all(&content).map_err(|e| StorageError::Io {
        path: path.into(),
        source: e,
    })?;

    temp.persist(path).map_err(|e| StorageError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    debug!(path = %path.display(), contacts = book.len(), "saved address book");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn sample_contact(name: &str, phone: &str, birthday: &str) -> Record {
        let mut record = Record::new(name).unwrap();
        record.add_phone(phone).unwrap();
        record.add_phone("0500000000").unwrap();
        record.add_address(format!("{} street 1", name)).unwrap();
        record.add_birthday(birthday).unwrap();
        record.add_email(&format!("{}@example.com", name.to_lowercase())).unwrap();
        record.add_note("Gift", "Books").unwrap();
        record.add_note("Call", "Weekly").unwrap();
        record
            .add_tag("Gift", ["home".parse().unwrap(), "ideas".parse().unwrap()])
            .unwrap();
        record
    }

    fn sample_book() -> AddressBook {
        [
            sample_contact("Ann", "0501111111", "15.06.1990"),
            sample_contact("Bob", "0502222222", "31.13.2020"),
            sample_contact("Cid", "0503333333", "29.02.2000"),
        ]
        .into_iter()
        .collect()
    }

    // ===========================================
    // Round trips
    // ===========================================

    #[test]
    fn roundtrip_empty_book() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_BOOK_FILE);

        write_book(&path, &AddressBook::new()).unwrap();
        assert_eq!(read_book(&path).unwrap(), AddressBook::new());
    }

    #[test]
    fn roundtrip_populated_book() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_BOOK_FILE);
        let book = sample_book();

        write_book(&path, &book).unwrap();
        let loaded = read_book(&path).unwrap();

        assert_eq!(loaded, book);
        let ann = loaded.find("Ann").unwrap();
        assert_eq!(ann.address(), Some("Ann street 1"));
        assert_eq!(ann.notes()[0].tags().len(), 2);
    }

    #[test]
    fn roundtrip_through_book_methods() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.dat");
        let book = sample_book();

        book.save_to_file(&path).unwrap();
        let mut loaded = AddressBook::new();
        loaded.load_from_file(&path).unwrap();

        assert_eq!(loaded, book);
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_BOOK_FILE);

        write_book(&path, &sample_book()).unwrap();
        write_book(&path, &AddressBook::new()).unwrap();

        assert!(read_book(&path).unwrap().is_empty());
    }

    // ===========================================
    // Missing and unwritable files
    // ===========================================

    #[test]
    fn read_missing_file_is_empty_book() {
        let dir = TempDir::new().unwrap();
        let book = read_book(&dir.path().join("absent.dat")).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn load_missing_file_clears_book() {
        let dir = TempDir::new().unwrap();
        let mut book = sample_book();
        book.load_from_file(&dir.path().join("absent.dat")).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn write_returns_parent_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("book.dat");
        let err = write_book(&path, &AddressBook::new()).unwrap_err();
        assert!(matches!(err, StorageError::ParentNotFound { .. }));
    }

    #[test]
    fn write_leaves_no_temp_files_on_success() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_BOOK_FILE);
        write_book(&path, &sample_book()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    // ===========================================
    // Decoding checks
    // ===========================================

    #[test]
    fn encoded_file_carries_format_and_version() {
        let bytes = encode_book(Path::new("book.dat"), &AddressBook::new()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["format"], FORMAT_NAME);
        assert_eq!(value["version"], FORMAT_VERSION);
    }

    #[test]
    fn optional_fields_encode_as_null() {
        let book: AddressBook = [Record::new("Ann").unwrap()].into_iter().collect();
        let bytes = encode_book(Path::new("book.dat"), &book).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value["contacts"]["Ann"]["address"].is_null());
        assert!(value["contacts"]["Ann"]["birthday"].is_null());
    }

    #[test]
    fn rejects_newer_version() {
        let bytes = br#"{"format":"contacts-book","version":2,"contacts":{"Ann":[1,2]}}"#;
        let err = decode_book(Path::new("book.dat"), bytes).unwrap_err();
        assert!(matches!(
            err,
            StorageError::UnsupportedVersion { found: 2, expected: 1, .. }
        ));
    }

    #[test]
    fn rejects_foreign_format() {
        let bytes = br#"{"format":"something-else","version":1,"contacts":{}}"#;
        let err = decode_book(Path::new("book.dat"), bytes).unwrap_err();
        assert!(matches!(err, StorageError::UnknownFormat { .. }));
    }

    #[test]
    fn rejects_invalid_phone_in_file() {
        let bytes = br#"{"format":"contacts-book","version":1,
            "contacts":{"Ann":{"name":"Ann","phones":["123"]}}}"#;
        let err = decode_book(Path::new("book.dat"), bytes).unwrap_err();
        assert!(matches!(err, StorageError::Decode { .. }));
    }

    #[test]
    fn rejects_key_name_mismatch() {
        let bytes = br#"{"format":"contacts-book","version":1,
            "contacts":{"Ann":{"name":"Bob"}}}"#;
        let err = decode_book(Path::new("book.dat"), bytes).unwrap_err();
        assert!(err.to_string().contains("'Ann' is named 'Bob'"));
    }

    #[test]
    fn rejects_untrimmed_name() {
        let bytes = br#"{"format":"contacts-book","version":1,
            "contacts":{" Bob ":{"name":" Bob "}}}"#;
        let err = decode_book(Path::new("book.dat"), bytes).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
        assert!(err.to_string().contains("surrounding whitespace"));
    }

    #[test]
    fn rejects_duplicate_note_titles() {
        let bytes = br#"{"format":"contacts-book","version":1,
            "contacts":{"Ann":{"name":"Ann","notes":[
                {"title":"T","body":"a"},{"title":"T","body":"b"}]}}}"#;
        let err = decode_book(Path::new("book.dat"), bytes).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }

    #[test]
    fn rejects_garbage() {
        let err = decode_book(Path::new("book.dat"), b"\x80\x04pickle").unwrap_err();
        assert!(matches!(err, StorageError::Decode { .. }));
    }

    #[test]
    fn missing_optional_fields_default() {
        let bytes = br#"{"format":"contacts-book","version":1,
            "contacts":{"Ann":{"name":"Ann"}}}"#;
        let book = decode_book(Path::new("book.dat"), bytes).unwrap();
        let ann = book.find("Ann").unwrap();
        assert!(ann.phones().is_empty());
        assert_eq!(ann.birthday(), None);
    }
}
