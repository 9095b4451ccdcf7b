//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// chrono format string for the `DD.MM.YYYY` textual form.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts single-digit days and months, so the shape is checked first.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid birthday regex"));

/// A birthday stored in its `DD.MM.YYYY` textual form.
///
/// The text is kept exactly as given; the parsed date is cached alongside it
/// so the upcoming-birthday scan never re-parses.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("29.07.1993").unwrap();
/// assert_eq!(birthday.as_str(), "29.07.1993");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not have
    /// the two-digit day, two-digit month, four-digit year shape or does not
    /// name a real calendar date (e.g. `31.02.2020`).
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !BIRTHDAY_SHAPE.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { raw, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Create a Birthday from a calendar date, rendering it as `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Fails for dates whose year does not fit in four digits.
    pub fn from_date(date: NaiveDate) -> Result<Self, ValidationError> {
        Self::new(format_date(date))
    }

    /// The parsed calendar date, including the birth year.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Month of the birthday (1-12).
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Day of month of the birthday (1-31).
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Get the birthday text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.raw
    }
}

/// Format a date in the `DD.MM.YYYY` form used for both input and output.
pub fn format_date(date: NaiveDate) -> String {
    date.format(BIRTHDAY_FORMAT).to_string()
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as the original text
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
