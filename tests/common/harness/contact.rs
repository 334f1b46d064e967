//! Builder for contacts seeded into a test address book.

#![allow(dead_code)]

use contacts::domain::{Record, Tag};

/// Builder for a [`Record`] with sensible test defaults.
///
/// Values are validated when [`TestContact::to_record`] is called, so an
/// invalid value panics at seed time rather than inside the CLI.
#[derive(Debug, Clone, Default)]
pub struct TestContact {
    name: String,
    phones: Vec<String>,
    birthday: Option<String>,
    address: Option<String>,
    emails: Vec<String>,
    notes: Vec<(String, String, Vec<String>)>,
}

impl TestContact {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phones.push(phone.to_string());
        self
    }

    pub fn birthday(mut self, birthday: &str) -> Self {
        self.birthday = Some(birthday.to_string());
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.emails.push(email.to_string());
        self
    }

    pub fn note(mut self, title: &str, body: &str) -> Self {
        self.notes
            .push((title.to_string(), body.to_string(), Vec::new()));
        self
    }

    /// Adds a note carrying `tags`.
    pub fn tagged_note(mut self, title: &str, body: &str, tags: &[&str]) -> Self {
        let tags = tags.iter().map(|t| t.to_string()).collect();
        self.notes.push((title.to_string(), body.to_string(), tags));
        self
    }

    /// Builds the domain record.
    ///
    /// # Panics
    ///
    /// Panics if any value fails validation.
    pub fn to_record(&self) -> Record {
        let mut record = Record::new(self.name.as_str()).expect("invalid test name");
        for phone in &self.phones {
            record.add_phone(phone).expect("invalid test phone");
        }
        if let Some(birthday) = &self.birthday {
            record.add_birthday(birthday).expect("invalid test birthday");
        }
        if let Some(address) = &self.address {
            record.add_address(address.as_str()).expect("address set twice");
        }
        for email in &self.emails {
            record.add_email(email).expect("invalid test email");
        }
        for (title, body, tags) in &self.notes {
            record
                .add_note(title.as_str(), body.as_str())
                .expect("duplicate test note");
            let tags = tags.iter().map(|t| Tag::new(t).expect("invalid test tag"));
            record.add_tag(title, tags).expect("note just added");
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_builds_record() {
        let record = TestContact::new("Ann")
            .phone("0501234567")
            .birthday("15.06.1990")
            .tagged_note("Gift", "Books", &["home"])
            .to_record();

        assert_eq!(record.name(), "Ann");
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.birthday().unwrap().as_str(), "15.06.1990");
        assert_eq!(record.note("Gift").unwrap().tags().len(), 1);
    }
}
