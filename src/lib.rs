//! Contact Book - a personal address book library.
//!
//! Contacts carry a validated name, any number of phone numbers, and an
//! optional birthday. They live in an [`AddressBook`] that supports lookup,
//! substring search, batched iteration, and persistence to framed binary
//! snapshots and CSV tables.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone, name, birthday) and the clock
//! - **models**: The contact record aggregating those values
//! - **book**: The name-keyed address book and its batch iterator
//! - **storage**: Snapshot framing and CSV export/import
//! - **error**: Custom error types for precise error handling
//! - **config**: Driver configuration from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use book::{AddressBook, Batch, Batches, ImportSummary};
pub use config::Config;
pub use domain::{Birthday, Clock, FixedClock, PersonName, PhoneNumber, SystemClock, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::ContactRecord;
