//! The address book and its upcoming-birthday query.

mod address_book;
pub mod birthdays;

pub use address_book::{Directory, UpcomingBirthdays};
pub use birthdays::LeapDayPolicy;
