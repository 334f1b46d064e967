//! contacts - a command-line address book with notes, tags and birthdays

pub mod cli;
pub mod domain;
pub mod infra;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, config::Config, handlers::*};
use domain::{AddressBook, ContactError};

/// Exit code for any failure that is not a [`ContactError`], such as an
/// unreadable book file.
pub const EXIT_FAILURE: u8 = 1;

/// Main entry point for the CLI application.
///
/// The book is loaded once, the command runs against it, and the book is
/// saved only when a mutating command succeeds.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        print!("{}", handle_completions(args)?);
        return Ok(());
    }

    let config = Config::load()?;
    let path = config.book_path(cli.file.as_ref());

    let mut book = AddressBook::new();
    book.load_from_file(&path)
        .with_context(|| format!("failed to load address book from {}", path.display()))?;

    let output = dispatch(&cli.command, &mut book, &config)?;
    debug!(command = ?cli.command, "command succeeded");

    if cli.command.mutates() {
        book.save_to_file(&path)
            .with_context(|| format!("failed to save address book to {}", path.display()))?;
    }

    println!("{}", output);
    Ok(())
}

fn dispatch(command: &Command, book: &mut AddressBook, config: &Config) -> Result<String> {
    match command {
        Command::AddContact(args) => handle_add_contact(args, book),
        Command::RemoveContact(args) => handle_remove_contact(args, book),
        Command::All(args) => handle_all(args, book),
        Command::Show(args) => handle_show(args, book),
        Command::AddPhone(args) => handle_add_phone(args, book),
        Command::EditPhone(args) => handle_edit_phone(args, book),
        Command::RemovePhone(args) => handle_remove_phone(args, book),
        Command::ShowPhones(args) => handle_show_phones(args, book),
        Command::AddBirthday(args) => handle_add_birthday(args, book),
        Command::ShowBirthday(args) => handle_show_birthday(args, book),
        Command::Birthdays(args) => handle_birthdays(
            args,
            book,
            Local::now().date_naive(),
            config.birthday_days(args.days),
        ),
        Command::AddAddress(args) => handle_add_address(args, book),
        Command::EditAddress(args) => handle_edit_address(args, book),
        Command::RemoveAddress(args) => handle_remove_address(args, book),
        Command::AddEmail(args) => handle_add_email(args, book),
        Command::RemoveEmail(args) => handle_remove_email(args, book),
        Command::ShowEmails(args) => handle_show_emails(args, book),
        Command::AddNote(args) => handle_add_note(args, book),
        Command::EditNote(args) => handle_edit_note(args, book),
        Command::RemoveNote(args) => handle_remove_note(args, book),
        Command::SearchNote(args) => handle_search_note(args, book),
        Command::AddTag(args) => handle_add_tag(args, book),
        Command::RemoveTag(args) => handle_remove_tag(args, book),
        Command::SearchByTags(args) => handle_search_by_tags(args, book),
        Command::SortNotes(args) => handle_sort_notes(args, book),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Maps a failed run to its process exit code.
///
/// Contact errors use the code of their [`ErrorKind`](domain::ErrorKind);
/// everything else is [`EXIT_FAILURE`].
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ContactError>())
        .map_or(EXIT_FAILURE, |contact| contact.kind().exit_code())
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `-v` flags.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
