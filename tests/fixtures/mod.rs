//! Test fixtures and sample data for integration tests.
//!
//! Builders for contacts and dates shared by the directory and birthday tests.

use address_book::{Contact, Directory, UpcomingBirthdays};
use chrono::NaiveDate;

/// Build a date, panicking on an invalid calendar value.
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Create a contact with the given phones and no birthday.
pub fn sample_contact(name: &str, phones: &[&str]) -> Contact {
    let mut contact = Contact::new(name);
    for phone in phones {
        contact.add_phone(phone).expect("valid test phone");
    }
    contact
}

/// Create a contact with a single phone and a birthday.
#[allow(dead_code)]
pub fn contact_with_birthday(name: &str, birthday: &str) -> Contact {
    let mut contact = sample_contact(name, &["1234567890"]);
    contact.add_birthday(birthday).expect("valid test birthday");
    contact
}

/// Build a directory from `(name, birthday)` pairs, in order.
#[allow(dead_code)]
pub fn directory_with_birthdays(entries: &[(&str, &str)]) -> Directory {
    let mut directory = Directory::new();
    for (name, birthday) in entries {
        directory.add_record(contact_with_birthday(name, birthday));
    }
    directory
}

/// Names listed under `key`, or an empty list if the key is absent.
#[allow(dead_code)]
pub fn names_on<'a>(upcoming: &UpcomingBirthdays<'a>, key: &str) -> Vec<&'a str> {
    upcoming
        .get(key)
        .map(|contacts| contacts.iter().copied().map(|c| c.name().as_str()).collect())
        .unwrap_or_default()
}

/// Every name in the result, regardless of date.
#[allow(dead_code)]
pub fn all_names<'a>(upcoming: &UpcomingBirthdays<'a>) -> Vec<&'a str> {
    let mut names: Vec<&str> = upcoming
        .values()
        .flatten()
        .copied()
        .map(|c| c.name().as_str())
        .collect();
    names.sort_unstable();
    names
}
