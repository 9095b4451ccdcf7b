//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a contact. Phone numbers and
//! birthdays are validated at construction time, so an invalid value can
//! never be stored on a contact.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{format_date, Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::Name;
pub use phone::PhoneNumber;
