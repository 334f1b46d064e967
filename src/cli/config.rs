//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::infra::DEFAULT_BOOK_FILE;

/// Look-ahead window used by `birthdays` when neither the command line nor
/// the config file gives one.
pub const DEFAULT_BIRTHDAY_DAYS: u32 = 7;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default address book file
    pub file: Option<PathBuf>,

    /// Default look-ahead window for `birthdays`, in days
    pub birthday_days: Option<u32>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/contacts/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("contacts")
            .join("config.toml")
    }

    /// Resolve the address book file, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--file` argument
    /// 2. Config file `file` setting
    /// 3. `address_book.dat` in the current directory
    pub fn book_path(&self, cli_file: Option<&PathBuf>) -> PathBuf {
        cli_file
            .cloned()
            .or_else(|| self.file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BOOK_FILE))
    }

    /// Resolve the birthday window, with CLI argument taking precedence.
    pub fn birthday_days(&self, cli_days: Option<u32>) -> u32 {
        cli_days
            .or(self.birthday_days)
            .unwrap_or(DEFAULT_BIRTHDAY_DAYS)
    }
}
