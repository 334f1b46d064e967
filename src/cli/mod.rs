//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// contacts - a personal address book with notes and birthday reminders
#[derive(Parser, Debug)]
#[command(name = "contacts", version, about, long_about = None)]
pub struct Cli {
    /// Address book file (overrides config file)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new contact
    AddContact(ContactArgs),

    /// Remove a contact
    RemoveContact(ContactArgs),

    /// Show all contacts
    All(AllArgs),

    /// Show one contact in full
    Show(ShowArgs),

    /// Add a phone number to a contact
    AddPhone(PhoneArgs),

    /// Replace a phone number of a contact
    EditPhone(EditPhoneArgs),

    /// Remove a phone number from a contact
    RemovePhone(PhoneArgs),

    /// Show all phone numbers of a contact
    ShowPhones(ContactArgs),

    /// Set the birthday of a contact (DD.MM.YYYY)
    AddBirthday(BirthdayArgs),

    /// Show the birthday of a contact
    ShowBirthday(ContactArgs),

    /// Show upcoming birthdays grouped by weekday
    Birthdays(BirthdaysArgs),

    /// Add an address to a contact
    AddAddress(AddressArgs),

    /// Replace the address of a contact
    EditAddress(AddressArgs),

    /// Remove the address of a contact
    RemoveAddress(ContactArgs),

    /// Add an email to a contact
    AddEmail(EmailArgs),

    /// Remove an email from a contact
    RemoveEmail(EmailArgs),

    /// Show all emails of a contact
    ShowEmails(ContactArgs),

    /// Add a note to a contact
    AddNote(NoteArgs),

    /// Replace the text of a contact's note
    EditNote(NoteArgs),

    /// Remove a note from a contact
    RemoveNote(NoteRefArgs),

    /// Find a note by title across all contacts
    SearchNote(SearchNoteArgs),

    /// Add tags to a contact's note
    AddTag(AddTagArgs),

    /// Remove a tag from a contact's note
    RemoveTag(RemoveTagArgs),

    /// List a contact's notes carrying any of the given tags
    SearchByTags(SearchByTagsArgs),

    /// Reorder a contact's notes by how many of the given tags they carry
    SortNotes(SortNotesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Command {
    /// Returns true if the command changes the address book.
    pub fn mutates(&self) -> bool {
        !matches!(
            self,
            Command::All(_)
                | Command::Show(_)
                | Command::ShowPhones(_)
                | Command::ShowBirthday(_)
                | Command::Birthdays(_)
                | Command::ShowEmails(_)
                | Command::SearchNote(_)
                | Command::SearchByTags(_)
                | Command::Completions(_)
        )
    }
}

/// Arguments for commands that take only a contact name
#[derive(Parser, Debug)]
pub struct ContactArgs {
    /// Contact name
    pub name: String,
}

/// Arguments for the `all` command
#[derive(Parser, Debug)]
pub struct AllArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Contact name
    pub name: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `add-phone` and `remove-phone`
#[derive(Parser, Debug)]
pub struct PhoneArgs {
    /// Contact name
    pub name: String,

    /// Phone number (10 digits)
    pub phone: String,
}

/// Arguments for the `edit-phone` command
#[derive(Parser, Debug)]
pub struct EditPhoneArgs {
    /// Contact name
    pub name: String,

    /// Phone number to replace
    pub old: String,

    /// New phone number (10 digits)
    pub new: String,
}

/// Arguments for the `add-birthday` command
#[derive(Parser, Debug)]
pub struct BirthdayArgs {
    /// Contact name
    pub name: String,

    /// Birthday as DD.MM.YYYY
    pub birthday: String,
}

/// Arguments for the `birthdays` command
#[derive(Parser, Debug)]
pub struct BirthdaysArgs {
    /// Number of days to look ahead (default from config, else 7)
    pub days: Option<u32>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `add-address` and `edit-address`
#[derive(Parser, Debug)]
pub struct AddressArgs {
    /// Contact name
    pub name: String,

    /// Address; multiple words are joined with spaces
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub address: Vec<String>,
}

/// Arguments for `add-email` and `remove-email`
#[derive(Parser, Debug)]
pub struct EmailArgs {
    /// Contact name
    pub name: String,

    /// Email address
    pub email: String,
}

/// Arguments for `add-note` and `edit-note`
#[derive(Parser, Debug)]
pub struct NoteArgs {
    /// Contact name
    pub name: String,

    /// Note title
    pub title: String,

    /// Note text; multiple words are joined with spaces
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub body: Vec<String>,
}

/// Arguments for the `remove-note` command
#[derive(Parser, Debug)]
pub struct NoteRefArgs {
    /// Contact name
    pub name: String,

    /// Note title
    pub title: String,
}

/// Arguments for the `search-note` command
#[derive(Parser, Debug)]
pub struct SearchNoteArgs {
    /// Note title
    pub title: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `add-tag` command
#[derive(Parser, Debug)]
pub struct AddTagArgs {
    /// Contact name
    pub name: String,

    /// Note title
    pub title: String,

    /// Tags to add
    #[arg(required = true, num_args = 1..)]
    pub tags: Vec<String>,
}

/// Arguments for the `remove-tag` command
#[derive(Parser, Debug)]
pub struct RemoveTagArgs {
    /// Contact name
    pub name: String,

    /// Note title
    pub title: String,

    /// Tag to remove
    pub tag: String,
}

/// Arguments for the `search-by-tags` command
#[derive(Parser, Debug)]
pub struct SearchByTagsArgs {
    /// Contact name
    pub name: String,

    /// Tags to look for (any match)
    #[arg(required = true, num_args = 1..)]
    pub tags: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `sort-notes` command
#[derive(Parser, Debug)]
pub struct SortNotesArgs {
    /// Contact name
    pub name: String,

    /// Tags to rank notes by
    #[arg(required = true, num_args = 1..)]
    pub tags: Vec<String>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
