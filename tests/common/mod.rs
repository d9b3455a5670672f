//! Shared fixtures for integration tests.

#![allow(dead_code)]

use contact_book::{AddressBook, Birthday, ContactRecord, FixedClock, PersonName, PhoneNumber};

/// A clock pinned to 1 June 2024.
pub fn fixed_clock() -> FixedClock {
    FixedClock::ymd(2024, 6, 1).expect("valid date")
}

pub fn phone(digits: &str) -> PhoneNumber {
    PhoneNumber::new(digits).expect("valid phone")
}

/// Create a record with the given phones and no birthday.
pub fn sample_record(name: &str, phones: &[&str]) -> ContactRecord {
    ContactRecord::new(
        PersonName::new(name).expect("valid name"),
        phones.iter().map(|p| phone(p)).collect(),
        None,
    )
}

/// Create a record with a birthday validated against [`fixed_clock`].
pub fn sample_record_with_birthday(name: &str, phones: &[&str], birthday: &str) -> ContactRecord {
    let mut record = sample_record(name, phones);
    record.set_birthday(Some(
        Birthday::parse(birthday, &fixed_clock()).expect("valid birthday"),
    ));
    record
}

/// The five contacts of the demo driver: Bill, Billq, Billw, Bille, Billr
/// with phones 1234567890 through 1234567894.
pub fn demo_book() -> AddressBook {
    let mut book = AddressBook::default();
    for (i, name) in ["bill", "billq", "billw", "bille", "billr"].iter().enumerate() {
        let digits = format!("123456789{}", i);
        book.add_record(sample_record(name, &[digits.as_str()]));
    }
    book
}

/// Names in iteration order.
pub fn names(book: &AddressBook) -> Vec<String> {
    book.list_contacts()
        .map(|(name, _)| name.to_string())
        .collect()
}
