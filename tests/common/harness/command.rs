//! Fluent wrapper around assert_cmd::Command.

// Test utility; not every helper is used by every test binary
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `contacts` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct ContactsCommand {
    args: Vec<String>,
    config_home: Option<PathBuf>,
}

impl ContactsCommand {
    /// Creates a new command for the `contacts` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config_home: None,
        }
    }

    /// Sets the `--file` option to choose the address book.
    pub fn file(mut self, path: &Path) -> Self {
        self.args.push("--file".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points the config lookup at `dir` instead of the user's config.
    pub fn config_home(mut self, dir: &Path) -> Self {
        self.config_home = Some(dir.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("contacts").expect("Failed to find contacts binary");
        cmd.args(&self.args).env_remove("RUST_LOG");
        if let Some(dir) = &self.config_home {
            cmd.env("XDG_CONFIG_HOME", dir).env("HOME", dir);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for `add-contact NAME`.
    pub fn add_contact(self, name: &str) -> Self {
        self.args(["add-contact", name])
    }

    /// Configures for `all`.
    pub fn all(self) -> Self {
        self.args(["all"])
    }

    /// Configures for `show NAME`.
    pub fn show(self, name: &str) -> Self {
        self.args(["show", name])
    }

    /// Configures for `birthdays`.
    pub fn birthdays(self) -> Self {
        self.args(["birthdays"])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for ContactsCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        ContactsCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("book.json");
        let cmd = ContactsCommand::new().file(&path);
        let args = cmd.get_args();
        assert_eq!(args[0], "--file");
        assert_eq!(args[1], path.to_string_lossy());
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = ContactsCommand::new().show("Ann").format_json();
        assert_eq!(cmd.get_args(), ["show", "Ann", "--format", "json"]);
    }
}
