//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! phone numbers, names, and birthdays. These value objects validate at
//! construction time and prevent invalid data from being represented in the
//! system. The [`Clock`] abstraction supplies "today" to everything that
//! depends on the calendar.

pub mod birthday;
pub mod clock;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::ValidationError;
pub use name::PersonName;
pub use phone::PhoneNumber;
