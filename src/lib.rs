//! Address Book - an in-memory contact directory.
//!
//! Contacts carry a name, validated phone numbers and an optional birthday.
//! The directory answers which contacts have a birthday within the next
//! week, moving weekend birthdays to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone number, birthday)
//! - **models**: The contact record
//! - **directory**: Name-keyed contact storage and the upcoming-birthday query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **observability**: Tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use address_book::{Contact, Directory};
//! use chrono::NaiveDate;
//!
//! let mut john = Contact::new("John");
//! john.add_phone("1234567890").unwrap();
//! john.add_birthday("29.07.1993").unwrap();
//!
//! let mut book = Directory::new();
//! book.add_record(john);
//!
//! let today = NaiveDate::from_ymd_opt(2024, 7, 25).unwrap();
//! let upcoming = book.get_upcoming_birthdays(today);
//! assert_eq!(upcoming["29.07.2024"][0].name().as_str(), "John");
//! ```

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;

pub use config::Config;
pub use directory::{Directory, LeapDayPolicy, UpcomingBirthdays};
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{ConfigError, DirectoryError, DirectoryResult};
pub use models::Contact;
