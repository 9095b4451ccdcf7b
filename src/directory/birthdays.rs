//! Birthday date arithmetic.
//!
//! Pure functions behind the upcoming-birthday query: finding the next
//! occurrence of a birthday and moving weekend dates to Monday.

use crate::domain::Birthday;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt;
use std::str::FromStr;

/// Where a Feb 29 birthday is observed in a year without Feb 29.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LeapDayPolicy {
    /// Observe on Feb 28.
    #[default]
    Feb28,

    /// Observe on Mar 1.
    Mar1,
}

impl FromStr for LeapDayPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "feb28" => Ok(Self::Feb28),
            "mar1" => Ok(Self::Mar1),
            other => Err(format!("Expected feb28 or mar1, got: {}", other)),
        }
    }
}

impl fmt::Display for LeapDayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feb28 => write!(f, "feb28"),
            Self::Mar1 => write!(f, "mar1"),
        }
    }
}

/// The date a birthday falls on in `year`.
///
/// Only Feb 29 can be missing from a year; it resolves per `policy`.
/// Returns `None` only if `year` is outside chrono's supported range.
pub fn occurrence_in_year(
    month: u32,
    day: u32,
    year: i32,
    policy: LeapDayPolicy,
) -> Option<NaiveDate> {
    if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
        return Some(date);
    }

    if (month, day) != (2, 29) {
        return None;
    }

    tracing::trace!(year, policy = %policy, "Leap-day birthday in non-leap year");

    match policy {
        LeapDayPolicy::Feb28 => NaiveDate::from_ymd_opt(year, 2, 28),
        LeapDayPolicy::Mar1 => NaiveDate::from_ymd_opt(year, 3, 1),
    }
}

/// The first occurrence of `birthday` on or after `today`.
pub fn next_birthday(
    birthday: &Birthday,
    today: NaiveDate,
    policy: LeapDayPolicy,
) -> Option<NaiveDate> {
    let (month, day) = (birthday.month(), birthday.day());

    let this_year = occurrence_in_year(month, day, today.year(), policy)?;
    if this_year >= today {
        return Some(this_year);
    }

    occurrence_in_year(month, day, today.year().checked_add(1)?, policy)
}

/// Move a Saturday or Sunday to the following Monday.
pub fn congratulation_date(birthday: NaiveDate) -> Option<NaiveDate> {
    match birthday.weekday() {
        Weekday::Sat => birthday.checked_add_days(Days::new(2)),
        Weekday::Sun => birthday.checked_add_days(Days::new(1)),
        _ => Some(birthday),
    }
}

/// Days from `today` until `date`.
pub fn days_until(today: NaiveDate, date: NaiveDate) -> i64 {
    (date - today).num_days()
}
