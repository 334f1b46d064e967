//! Upcoming-birthday computation and weekday bucketing.

use crate::domain::Record;
use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use tracing::warn;

/// Sentinel text for an empty birthday window.
pub const NO_UPCOMING_BIRTHDAYS: &str = "No upcoming birthdays.";

/// The next birthday of one contact inside a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The anniversary itself.
    pub date: NaiveDate,
    /// Days from today until `date`; zero means today.
    pub days_until: i64,
    /// The weekday the greeting is due on (weekends move to Monday).
    pub celebrate_on: Weekday,
}

/// Returns the weekday a birthday on `date` is celebrated on.
///
/// Saturday and Sunday birthdays move to Monday.
pub fn celebration_day(date: NaiveDate) -> Weekday {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => Weekday::Mon,
        weekday => weekday,
    }
}

/// Returns the full English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Collects the birthdays falling in `[today, today + days]`, in the
/// iteration order of `records`.
///
/// Birthdays whose digits are not a calendar date are skipped.
pub(crate) fn collect_upcoming<'a>(
    records: impl Iterator<Item = &'a Record>,
    today: NaiveDate,
    days: u32,
) -> Vec<UpcomingBirthday> {
    let mut upcoming = Vec::new();

    for record in records {
        let Some(birthday) = record.birthday() else {
            continue;
        };
        let Some(date) = birthday.next_occurrence(today) else {
            warn!(
                contact = record.name(),
                birthday = birthday.as_str(),
                "birthday is not a calendar date; skipping"
            );
            continue;
        };

        let days_until = (date - today).num_days();
        if (0..=i64::from(days)).contains(&days_until) {
            upcoming.push(UpcomingBirthday {
                name: record.name().to_string(),
                date,
                days_until,
                celebrate_on: celebration_day(date),
            });
        }
    }

    upcoming
}

const WORKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Contact names grouped by the weekday their birthday is celebrated on.
///
/// Only Monday to Friday can hold names. Names keep the order in which they
/// were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthdaySchedule {
    // Indexed by days from Monday
    buckets: [Vec<String>; 5],
}

impl BirthdaySchedule {
    /// Groups upcoming birthdays, keeping their order within each weekday.
    pub fn from_upcoming(upcoming: &[UpcomingBirthday]) -> Self {
        let mut schedule = Self::default();
        for entry in upcoming {
            schedule.push(entry.celebrate_on, entry.name.clone());
        }
        schedule
    }

    fn push(&mut self, weekday: Weekday, name: String) {
        let index = weekday.num_days_from_monday() as usize;
        if let Some(bucket) = self.buckets.get_mut(index) {
            bucket.push(name);
        }
    }

    /// Returns the names celebrated on `weekday`.
    pub fn names_on(&self, weekday: Weekday) -> &[String] {
        self.buckets
            .get(weekday.num_days_from_monday() as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterates non-empty weekdays from Monday to Friday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> {
        WORKDAYS
            .into_iter()
            .zip(self.buckets.iter().map(Vec::as_slice))
            .filter(|(_, names)| !names.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

impl fmt::Display for BirthdaySchedule {
    /// One `Weekday: name, name` line per weekday, or the empty sentinel.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{}", NO_UPCOMING_BIRTHDAYS);
        }
        let lines: Vec<String> = self
            .iter()
            .map(|(weekday, names)| format!("{}: {}", weekday_name(weekday), names.join(", ")))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}
