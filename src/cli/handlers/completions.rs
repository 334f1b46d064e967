//! Shell completions handler.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs};

/// Renders the completion script for the requested shell.
pub fn handle_completions(args: &CompletionsArgs) -> Result<String> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut script = Vec::new();
    generate(args.shell, &mut cmd, name, &mut script);
    Ok(String::from_utf8(script)?)
}
