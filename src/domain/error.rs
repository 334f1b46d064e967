//! Errors raised by record and address book operations.

use thiserror::Error;

/// The user-facing category of a [`ContactError`].
///
/// Each kind has its own process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed value, or an operation that conflicts with existing state.
    Validation,
    /// A contact name or note title that does not exist.
    NotFound,
    /// Wrong argument count or shape from the invocation layer.
    MalformedInput,
}

impl ErrorKind {
    /// Exit code for a command that failed with this kind.
    ///
    /// `MalformedInput` shares code 2 with clap's usage errors.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::MalformedInput => 2,
            ErrorKind::Validation => 3,
            ErrorKind::NotFound => 4,
        }
    }
}

/// Errors from contact, note and field operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("invalid phone number '{0}': use a 10-digit number")]
    InvalidPhone(String),

    #[error("invalid birthday '{0}': use DD.MM.YYYY")]
    InvalidBirthday(String),

    #[error("invalid email '{0}': use name@company.com")]
    InvalidEmail(String),

    #[error("contact name cannot be empty")]
    EmptyName,

    #[error("invalid tag '{0}': tags must be non-empty and contain no whitespace")]
    InvalidTag(String),

    #[error("contact '{0}' already exists")]
    ContactExists(String),

    #[error("contact '{0}' does not exist; use 'add-contact' to add it")]
    ContactNotFound(String),

    #[error("contact already has an address; use 'edit-address' to modify it")]
    AddressExists,

    #[error("no address to edit; add an address first")]
    NoAddress,

    #[error("contact '{0}' has no birthday")]
    NoBirthday(String),

    #[error("note '{0}' already exists")]
    NoteExists(String),

    #[error("no note titled '{0}'")]
    NoteNotFound(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl ContactError {
    /// Returns the user-facing category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContactError::InvalidPhone(_)
            | ContactError::InvalidBirthday(_)
            | ContactError::InvalidEmail(_)
            | ContactError::EmptyName
            | ContactError::InvalidTag(_)
            | ContactError::ContactExists(_)
            | ContactError::AddressExists
            | ContactError::NoAddress
            | ContactError::NoteExists(_) => ErrorKind::Validation,
            ContactError::ContactNotFound(_)
            | ContactError::NoBirthday(_)
            | ContactError::NoteNotFound(_) => ErrorKind::NotFound,
            ContactError::MalformedInput(_) => ErrorKind::MalformedInput,
        }
    }
}
