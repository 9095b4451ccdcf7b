//! Contact model representing a person in the address book.

use crate::domain::{Birthday, Name, PhoneNumber};
use crate::error::{DirectoryError, DirectoryResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, phone numbers in insertion order, and an optional birthday.
///
/// The name is fixed at creation. Phones may repeat. Every mutation either
/// applies fully or leaves the contact untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Contact {
    /// Create a new contact with no phones and no birthday.
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> DirectoryResult<()> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Removing an absent phone is a no-op.
    pub fn remove_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);

        tracing::trace!(
            contact = %self.name,
            removed = before - self.phones.len(),
            "Removed phone"
        );
    }

    /// Replace every phone equal to `old` with `new`, keeping positions.
    ///
    /// # Errors
    ///
    /// - `DirectoryError::PhoneNotFound` if no phone equals `old`
    /// - `DirectoryError::Validation` if `new` is not a valid phone number
    pub fn edit_phone(&mut self, old: &str, new: &str) -> DirectoryResult<()> {
        if self.find_phone(old).is_none() {
            return Err(DirectoryError::PhoneNotFound(old.to_string()));
        }

        let replacement = PhoneNumber::new(new)?;

        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            *phone = replacement.clone();
        }

        Ok(())
    }

    /// The first phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> DirectoryResult<()> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Render the contact as `Contact name: <name>, phones: <p1>; <p2>`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;

        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn phones(contact: &Contact) -> Vec<&str> {
        contact.phones().iter().map(PhoneNumber::as_str).collect()
    }

    #[test]
    fn test_contact_new() {
        let contact = Contact::new("John");
        assert_eq!(contact.name().as_str(), "John");
        assert!(contact.phones().is_empty());
        assert!(contact.birthday().is_none());
    }

    #[test]
    fn test_add_phone() {
        let mut contact = Contact::new("John");
        contact.add_phone("1234567890").unwrap();
        contact.add_phone("5555555555").unwrap();
        contact.add_phone("1234567890").unwrap();

        assert_eq!(phones(&contact), ["1234567890", "5555555555", "1234567890"]);
    }

    #[test]
    fn test_add_phone_invalid_leaves_contact_unchanged() {
        let mut contact = Contact::new("John");
        contact.add_phone("1234567890").unwrap();

        let err = contact.add_phone("12345").unwrap_err();
        assert_eq!(
            err,
            DirectoryError::Validation(ValidationError::InvalidPhone("12345".to_string()))
        );
        assert_eq!(err.to_string(), "Wrong phone");
        assert_eq!(phones(&contact), ["1234567890"]);
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut contact = Contact::new("John");
        contact.add_phone("1234567890").unwrap();
        contact.add_phone("5555555555").unwrap();
        contact.add_phone("1234567890").unwrap();

        contact.remove_phone("1234567890");
        assert_eq!(phones(&contact), ["5555555555"]);

        // Absent phone is a no-op
        contact.remove_phone("0000000000");
        assert_eq!(phones(&contact), ["5555555555"]);
    }

    #[test]
    fn test_edit_phone_preserves_order() {
        let mut contact = Contact::new("John");
        contact.add_phone("1234567890").unwrap();
        contact.add_phone("5555555555").unwrap();

        contact.edit_phone("1234567890", "1112223333").unwrap();
        assert_eq!(phones(&contact), ["1112223333", "5555555555"]);
    }

    #[test]
    fn test_edit_phone_replaces_duplicates() {
        let mut contact = Contact::new("John");
        contact.add_phone("1234567890").unwrap();
        contact.add_phone("5555555555").unwrap();
        contact.add_phone("1234567890").unwrap();

        contact.edit_phone("1234567890", "9999999999").unwrap();
        assert_eq!(phones(&contact), ["9999999999", "5555555555", "9999999999"]);
    }

    #[test]
    fn test_edit_phone_missing_old() {
        let mut contact = Contact::new("John");
        contact.add_phone("1234567890").unwrap();

        let err = contact.edit_phone("0000000000", "1112223333").unwrap_err();
        assert_eq!(err, DirectoryError::PhoneNotFound("0000000000".to_string()));
        assert_eq!(phones(&contact), ["1234567890"]);
    }

    #[test]
    fn test_edit_phone_invalid_new() {
        let mut contact = Contact::new("John");
        contact.add_phone("1234567890").unwrap();

        let err = contact.edit_phone("1234567890", "bad").unwrap_err();
        assert!(matches!(err, DirectoryError::Validation(_)));
        assert_eq!(phones(&contact), ["1234567890"]);
    }

    #[test]
    fn test_find_phone() {
        let mut contact = Contact::new("John");
        contact.add_phone("1234567890").unwrap();
        contact.add_phone("5555555555").unwrap();

        let found = contact.find_phone("5555555555").unwrap();
        assert_eq!(found.as_str(), "5555555555");
        assert!(contact.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut contact = Contact::new("Jane");
        contact.add_birthday("30.07.1993").unwrap();
        contact.add_birthday("01.01.1990").unwrap();

        assert_eq!(contact.birthday().unwrap().as_str(), "01.01.1990");
    }

    #[test]
    fn test_add_birthday_invalid_keeps_previous() {
        let mut contact = Contact::new("Jane");
        contact.add_birthday("30.07.1993").unwrap();

        let err = contact.add_birthday("1993-07-30").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
        assert_eq!(contact.birthday().unwrap().as_str(), "30.07.1993");
    }

    #[test]
    fn test_describe() {
        let mut contact = Contact::new("John");
        assert_eq!(contact.describe(), "Contact name: John, phones: ");

        contact.add_phone("1234567890").unwrap();
        assert_eq!(contact.describe(), "Contact name: John, phones: 1234567890");

        contact.add_phone("5555555555").unwrap();
        assert_eq!(
            contact.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555"
        );
    }

    #[test]
    fn test_contact_serialization() {
        let mut contact = Contact::new("John");
        contact.add_phone("1234567890").unwrap();
        contact.add_birthday("29.07.1993").unwrap();

        let json = serde_json::to_string(&contact).unwrap();
        assert_eq!(
            json,
            r#"{"name":"John","phones":["1234567890"],"birthday":"29.07.1993"}"#
        );

        let parsed: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, contact);
    }

    #[test]
    fn test_contact_deserialization_validates_fields() {
        let json = r#"{"name":"John","phones":["12-34"]}"#;
        assert!(serde_json::from_str::<Contact>(json).is_err());

        let json = r#"{"name":"John"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert!(contact.phones().is_empty());
        assert!(contact.birthday().is_none());
    }
}
