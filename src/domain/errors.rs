//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten decimal digits.
    InvalidPhone(String),

    /// The provided name contains non-alphabetic characters or is empty.
    InvalidName(String),

    /// The provided birthday does not match `dd.mm.yyyy` or is not a calendar date.
    BadDateFormat(String),

    /// The provided birthday is in the future or too far in the past.
    UnrealisticDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(f, "invalid phone format: {}", phone),
            Self::InvalidName(name) => write!(f, "invalid name format: {}", name),
            Self::BadDateFormat(date) => write!(f, "bad date format: {}", date),
            Self::UnrealisticDate(date) => write!(f, "unrealistic date: {}", date),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::InvalidPhone("12".to_string()).to_string(),
            "invalid phone format: 12"
        );
        assert_eq!(
            ValidationError::UnrealisticDate("01.01.1800".to_string()).to_string(),
            "unrealistic date: 01.01.1800"
        );
    }
}
