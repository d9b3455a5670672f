//! Birthday value object.

use super::clock::{Clock, SystemClock};
use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format of a birthday: zero-padded `dd.mm.yyyy`.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Oldest accepted birth year, counted back from the current year.
pub const MAX_AGE_YEARS: i32 = 120;

/// A calendar date of birth.
///
/// Construction checks the format strictly and rejects dates that are in the
/// future or [`MAX_AGE_YEARS`] or more years back.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Birthday, FixedClock};
///
/// let today = FixedClock::ymd(2024, 6, 1).unwrap();
/// let bday = Birthday::parse("12.08.1998", &today).unwrap();
/// assert_eq!(bday.to_string(), "12.08.1998");
/// assert!(Birthday::parse("12.08.2030", &today).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday, judging realism against the system date.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::parse(raw, &SystemClock)
    }

    /// Parse a birthday, judging realism against `clock`.
    ///
    /// # Errors
    ///
    /// - `ValidationError::BadDateFormat` if `raw` is not a zero-padded
    ///   `dd.mm.yyyy` calendar date.
    /// - `ValidationError::UnrealisticDate` if the date is after today or its
    ///   year is not later than the current year minus [`MAX_AGE_YEARS`].
    pub fn parse(raw: &str, clock: &dyn Clock) -> Result<Self, ValidationError> {
        let date = Self::parse_format(raw)?;
        let today = clock.today();

        if date > today || date.year() <= today.year() - MAX_AGE_YEARS {
            return Err(ValidationError::UnrealisticDate(raw.to_string()));
        }

        Ok(Self(date))
    }

    /// Format-only parse; used when reading previously validated data back.
    fn parse_format(raw: &str) -> Result<NaiveDate, ValidationError> {
        let bad = || ValidationError::BadDateFormat(raw.to_string());

        let bytes = raw.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                2 | 5 => *b == b'.',
                _ => b.is_ascii_digit(),
            });
        if !shape_ok {
            return Err(bad());
        }

        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT).map_err(|_| bad())
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Realism is judged at entry time only, so stored birthdays are re-read by
// format alone and do not expire as the calendar moves on.
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse_format(&s)
            .map(Birthday)
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
