//! Contact record: one person's name, phone numbers, and optional birthday.

use crate::domain::{Birthday, Clock, PersonName, PhoneNumber, SystemClock, ValidationError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single entry of the address book.
///
/// The name is fixed for the life of the record so that an address book
/// key can never drift away from the record it maps to. Phones keep their
/// insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: PersonName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record from a name, its phones, and an optional birthday.
    pub fn new(name: PersonName, phones: Vec<PhoneNumber>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    /// Create a record with no phones and no birthday.
    pub fn named(name: PersonName) -> Self {
        Self::new(name, Vec::new(), None)
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Set or clear the birthday.
    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    /// Append a phone. Duplicates are kept.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove every phone equal to `phone`. Absent phones are ignored.
    pub fn remove_phone(&mut self, phone: &PhoneNumber) {
        self.phones.retain(|p| p != phone);
    }

    /// Replace every phone whose digits equal `old` with `new`.
    ///
    /// A missing `old` is a silent no-op and `new` is not looked at.
    /// Otherwise `new` is validated before anything changes, so an invalid
    /// replacement leaves all phones untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        if !self.phones.iter().any(|p| p.as_str() == old) {
            tracing::debug!(contact = %self.name, old, "edit_phone matched no phone");
            return Ok(());
        }

        let replacement = PhoneNumber::new(new)?;
        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            *phone = replacement.clone();
        }

        Ok(())
    }

    /// Days until the next birthday, counted from the system date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(&SystemClock)
    }

    /// Days until the next birthday, counted from `clock`'s today.
    ///
    /// Returns `Some(0)` on the birthday itself and `None` when no birthday is
    /// stored. A 29 February birthday falls on 28 February in common years.
    pub fn days_to_birthday_from(&self, clock: &dyn Clock) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;
        let today = clock.today();

        let this_year = anniversary(birthday, today.year())?;
        let next = if this_year >= today {
            this_year
        } else {
            anniversary(birthday, today.year() + 1)?
        };

        Some((next - today).num_days())
    }
}

fn anniversary(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;

    fn phone(digits: &str) -> PhoneNumber {
        PhoneNumber::new(digits).unwrap()
    }

    fn bill() -> ContactRecord {
        ContactRecord::new(
            PersonName::new("bill").unwrap(),
            vec![phone("1234567890")],
            None,
        )
    }

    fn with_birthday(raw: &str, clock: &FixedClock) -> ContactRecord {
        let mut record = bill();
        record.set_birthday(Some(Birthday::parse(raw, clock).unwrap()));
        record
    }

    #[test]
    fn test_record_new() {
        let record = bill();
        assert_eq!(record.name().as_str(), "Bill");
        assert_eq!(record.phones(), &[phone("1234567890")]);
        assert!(record.birthday().is_none());

        let empty = ContactRecord::named(PersonName::new("ann").unwrap());
        assert!(empty.phones().is_empty());
    }

    #[test]
    fn test_add_phone_keeps_duplicates() {
        let mut record = bill();
        record.add_phone(phone("1234567890"));
        record.add_phone(phone("5555555555"));
        assert_eq!(
            record.phones(),
            &[phone("1234567890"), phone("1234567890"), phone("5555555555")]
        );
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut record = bill();
        record.add_phone(phone("5555555555"));
        record.add_phone(phone("1234567890"));

        record.remove_phone(&phone("1234567890"));
        assert_eq!(record.phones(), &[phone("5555555555")]);

        record.remove_phone(&phone("0000000000"));
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone() {
        let mut record = bill();
        record.add_phone(phone("1234567890"));
        record.edit_phone("1234567890", "0987654321").unwrap();
        assert_eq!(record.phones(), &[phone("0987654321"), phone("0987654321")]);
    }

    #[test]
    fn test_edit_phone_invalid_replacement_changes_nothing() {
        let mut record = bill();
        let err = record.edit_phone("1234567890", "12").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("12".to_string()));
        assert_eq!(record.phones(), &[phone("1234567890")]);
    }

    #[test]
    fn test_edit_phone_missing_is_noop() {
        let mut record = bill();
        assert!(record.edit_phone("0000000000", "1111111111").is_ok());
        assert_eq!(record.phones(), &[phone("1234567890")]);
    }

    #[test]
    fn test_edit_phone_missing_ignores_invalid_replacement() {
        let mut record = bill();
        assert_eq!(record.edit_phone("0000000000", "bad"), Ok(()));
        assert_eq!(record.phones(), &[phone("1234567890")]);
    }

    #[test]
    fn test_days_to_birthday_absent() {
        let clock = FixedClock::ymd(2024, 6, 1).unwrap();
        assert_eq!(bill().days_to_birthday_from(&clock), None);
    }

    #[test]
    fn test_days_to_birthday_later_this_year() {
        let clock = FixedClock::ymd(2023, 6, 1).unwrap();
        let record = with_birthday("12.08.1998", &clock);
        assert_eq!(record.days_to_birthday_from(&clock), Some(72));
    }

    #[test]
    fn test_days_to_birthday_today() {
        let clock = FixedClock::ymd(2023, 8, 12).unwrap();
        let record = with_birthday("12.08.1998", &clock);
        assert_eq!(record.days_to_birthday_from(&clock), Some(0));
    }

    #[test]
    fn test_days_to_birthday_rolls_into_next_year() {
        // 2023 is a common year; the next occurrence lies in leap year 2024.
        let clock = FixedClock::ymd(2023, 12, 31).unwrap();
        let record = with_birthday("01.03.1990", &clock);
        assert_eq!(record.days_to_birthday_from(&clock), Some(61));
    }

    #[test]
    fn test_days_to_birthday_leap_day_in_common_year() {
        let clock = FixedClock::ymd(2024, 3, 1).unwrap();
        let record = with_birthday("29.02.2000", &clock);
        // Next occurrence: 28.02.2025.
        assert_eq!(record.days_to_birthday_from(&clock), Some(364));
    }

    #[test]
    fn test_record_serialization_skips_missing_birthday() {
        let json = serde_json::to_string(&bill()).unwrap();
        assert_eq!(json, r#"{"name":"Bill","phones":["1234567890"]}"#);

        let back: ContactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bill());
    }
}
