//! The keyed collection of contacts.

use super::birthdays::{self, LeapDayPolicy};
use crate::config::Config;
use crate::domain::format_date;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Contact;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Contacts grouped by congratulation date (`DD.MM.YYYY`).
///
/// Within each list, contacts keep directory iteration order.
pub type UpcomingBirthdays<'a> = HashMap<String, Vec<&'a Contact>>;

/// An in-memory address book keyed by contact name.
///
/// Keys always equal the stored contact's name: contacts cannot be renamed,
/// and the backing map is never exposed mutably. Iteration follows
/// insertion order; overwriting a name keeps its original position.
#[derive(Debug, Clone)]
pub struct Directory {
    contacts: HashMap<String, Contact>,
    order: Vec<String>,
    window_days: u32,
    leap_day_policy: LeapDayPolicy,
}

impl Directory {
    /// Create an empty directory with default settings.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create an empty directory using the birthday settings from `config`.
    pub fn with_config(config: &Config) -> Self {
        Self {
            contacts: HashMap::new(),
            order: Vec::new(),
            window_days: config.birthday_window_days,
            leap_day_policy: config.leap_day_policy,
        }
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the directory holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Whether a contact is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    /// Contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.order.iter().filter_map(|name| self.contacts.get(name))
    }

    /// Insert a contact, replacing any contact with the same name.
    pub fn add_record(&mut self, contact: Contact) {
        let key = contact.name().as_str().to_string();

        if self.contacts.insert(key.clone(), contact).is_some() {
            tracing::debug!(name = %key, "Replaced existing contact");
        } else {
            tracing::debug!(name = %key, "Added contact");
            self.order.push(key);
        }
    }

    /// Look up a contact by name.
    pub fn find(&self, name: &str) -> DirectoryResult<&Contact> {
        self.contacts
            .get(name)
            .ok_or_else(|| DirectoryError::NotFound(name.to_string()))
    }

    /// Look up a contact by name for in-place editing.
    ///
    /// Changes made through the returned reference are visible to later lookups.
    pub fn find_mut(&mut self, name: &str) -> DirectoryResult<&mut Contact> {
        self.contacts
            .get_mut(name)
            .ok_or_else(|| DirectoryError::NotFound(name.to_string()))
    }

    /// Remove a contact by name, returning it.
    pub fn delete(&mut self, name: &str) -> DirectoryResult<Contact> {
        let contact = self
            .contacts
            .remove(name)
            .ok_or_else(|| DirectoryError::NotFound(name.to_string()))?;

        self.order.retain(|key| key != name);
        tracing::debug!(name = %name, "Deleted contact");

        Ok(contact)
    }

    /// Contacts to congratulate within the configured window after `today`.
    ///
    /// A birthday counts if its next occurrence (today included) is at most
    /// `window_days` away. Occurrences on a weekend are congratulated on the
    /// following Monday. Contacts without a birthday are skipped.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> UpcomingBirthdays<'_> {
        let mut upcoming: UpcomingBirthdays<'_> = HashMap::new();

        for contact in self.iter() {
            let Some(birthday) = contact.birthday() else {
                continue;
            };

            let Some(next) = birthdays::next_birthday(birthday, today, self.leap_day_policy)
            else {
                tracing::warn!(
                    name = %contact.name(),
                    birthday = %birthday,
                    "Could not place next birthday, skipping"
                );
                continue;
            };

            let days = birthdays::days_until(today, next);
            if days > i64::from(self.window_days) {
                tracing::trace!(name = %contact.name(), days, "Birthday outside window");
                continue;
            }

            let Some(congratulate_on) = birthdays::congratulation_date(next) else {
                tracing::warn!(
                    name = %contact.name(),
                    birthday = %birthday,
                    "Could not place congratulation date, skipping"
                );
                continue;
            };

            tracing::trace!(
                name = %contact.name(),
                days,
                congratulate_on = %congratulate_on,
                "Upcoming birthday"
            );

            upcoming
                .entry(format_date(congratulate_on))
                .or_default()
                .push(contact);
        }

        tracing::debug!(
            today = %today,
            dates = upcoming.len(),
            "Computed upcoming birthdays"
        );

        upcoming
    }

    /// `get_upcoming_birthdays` for the current local date.
    pub fn upcoming_birthdays_from_today(&self) -> UpcomingBirthdays<'_> {
        self.get_upcoming_birthdays(chrono::Local::now().date_naive())
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Contact;
    type IntoIter = Box<dyn Iterator<Item = &'a Contact> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
