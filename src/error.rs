//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on an address book.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field value failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No contact is stored under the requested name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// File could not be opened, read, or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot payload could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Snapshot file is truncated, empty, or holds an undecodable payload
    #[error("Snapshot deserialization failed: {0}")]
    Deserialization(String),

    /// CSV table could not be written or read
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
