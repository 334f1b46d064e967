//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::{ContactsCommand, TestContact};
use contacts::domain::AddressBook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary address book.
///
/// The temp directory doubles as the config home, so a developer's own
/// config file never leaks into a test run.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
    book_path: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with no book file yet.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        let book_path = root.join("address_book.dat");
        Self {
            _temp_dir: temp_dir,
            root,
            book_path,
        }
    }

    /// Returns the temp directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the address book file.
    pub fn book_path(&self) -> &Path {
        &self.book_path
    }

    /// Writes the given contacts as the address book file.
    pub fn seed(&self, contacts: &[TestContact]) {
        let book: AddressBook = contacts.iter().map(TestContact::to_record).collect();
        book.save_to_file(&self.book_path)
            .expect("Failed to write test address book");
    }

    /// Loads the address book file as the CLI left it.
    pub fn load_book(&self) -> AddressBook {
        let mut book = AddressBook::new();
        book.load_from_file(&self.book_path)
            .expect("Failed to read address book");
        book
    }

    /// Returns the raw file contents.
    pub fn read_book_file(&self) -> String {
        std::fs::read_to_string(&self.book_path).expect("Failed to read book file")
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a ContactsCommand configured for this test environment.
    pub fn cmd(&self) -> ContactsCommand {
        ContactsCommand::new()
            .config_home(&self.root)
            .file(&self.book_path)
    }

    /// Creates a ContactsCommand that uses this environment's config but
    /// no `--file` flag.
    pub fn cmd_without_file(&self) -> ContactsCommand {
        ContactsCommand::new().config_home(&self.root)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_starts_without_book() {
        let env = TestEnv::new();
        assert!(!env.book_path().exists());
        assert!(env.load_book().is_empty());
    }

    #[test]
    fn test_env_seed_roundtrip() {
        let env = TestEnv::new();
        env.seed(&[TestContact::new("Ann").phone("0501234567")]);

        let book = env.load_book();
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Ann").unwrap().phones()[0].as_str(), "0501234567");
    }
}
