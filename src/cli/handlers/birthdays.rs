//! Upcoming birthdays handler.

use anyhow::Result;
use chrono::NaiveDate;

use crate::cli::BirthdaysArgs;
use crate::cli::output::{BirthdayListing, Output, OutputFormat};
use crate::domain::AddressBook;

/// Renders the birthdays of the next `days` days counted from `today`.
pub fn handle_birthdays(
    args: &BirthdaysArgs,
    book: &AddressBook,
    today: NaiveDate,
    days: u32,
) -> Result<String> {
    match args.format {
        OutputFormat::Human => Ok(book
            .get_birthdays_days_interval_from(today, days)
            .to_string()),
        OutputFormat::Json => {
            let listings: Vec<BirthdayListing> = book
                .upcoming_birthdays_from(today, days)
                .iter()
                .map(BirthdayListing::from)
                .collect();
            Ok(Output::new(listings).to_json()?)
        }
    }
}
