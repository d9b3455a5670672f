//! The address book: a name-keyed collection of contact records.
//!
//! Records are keyed by their capitalized name and kept in insertion order.
//! Adding a record under a name that is already present replaces the stored
//! record in place (last write wins, phone lists are not merged). Lookups
//! capitalize the caller's string, so `"bill"`, `"BILL"` and `"Bill"` all
//! reach the same entry.
//!
//! All searches are linear scans; the collection is expected to stay small.

pub mod batches;

pub use batches::{Batch, Batches};

use crate::domain::{Clock, PersonName, PhoneNumber};
use crate::error::{BookError, BookResult};
use crate::models::ContactRecord;
use crate::storage::{csv_table, snapshot};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::path::Path;

/// Batch size used when none is configured.
pub const DEFAULT_BATCH_SIZE: NonZeroUsize = NonZeroUsize::MIN;

/// Outcome of [`AddressBook::import_csv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    /// Rows turned into records and added to the book.
    pub imported: usize,
    /// Rows dropped because a field failed validation.
    pub skipped: usize,
}

/// A name-keyed, insertion-ordered collection of [`ContactRecord`]s.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, ContactRecord};
/// use contact_book::domain::{PersonName, PhoneNumber};
///
/// let mut book = AddressBook::default();
/// book.add_record(ContactRecord::new(
///     PersonName::new("bill").unwrap(),
///     vec![PhoneNumber::new("1234567890").unwrap()],
///     None,
/// ));
///
/// assert_eq!(book.get_contact("BILL").unwrap()[0].as_str(), "1234567890");
/// assert_eq!(book.search_by_number("4567").len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
    batch_size: NonZeroUsize,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE)
    }
}

impl AddressBook {
    /// Create an empty book that iterates in chunks of `batch_size`.
    pub fn new(batch_size: NonZeroUsize) -> Self {
        Self {
            records: Vec::new(),
            batch_size,
        }
    }

    pub fn batch_size(&self) -> NonZeroUsize {
        self.batch_size
    }

    pub fn set_batch_size(&mut self, batch_size: NonZeroUsize) {
        tracing::debug!(batch_size = batch_size.get(), "Batch size changed");
        self.batch_size = batch_size;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = PersonName::capitalize(name);
        self.records.iter().position(|r| r.name().as_str() == key)
    }

    fn not_found(name: &str) -> BookError {
        BookError::ContactNotFound(PersonName::capitalize(name))
    }

    /// Insert `record`, replacing any record stored under the same name.
    ///
    /// A replaced record keeps its original position in iteration order.
    pub fn add_record(&mut self, record: ContactRecord) {
        match self.position(record.name().as_str()) {
            Some(index) => {
                tracing::debug!(contact = %record.name(), "Contact overwritten");
                self.records[index] = record;
            }
            None => {
                tracing::debug!(contact = %record.name(), "Contact added");
                self.records.push(record);
            }
        }
    }

    /// Whether a record is stored under `name` (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Phones of the contact stored under `name`.
    ///
    /// # Errors
    ///
    /// `BookError::ContactNotFound` if no such contact exists.
    pub fn get_contact(&self, name: &str) -> BookResult<&[PhoneNumber]> {
        self.get(name).map(ContactRecord::phones)
    }

    /// The record stored under `name`.
    pub fn get(&self, name: &str) -> BookResult<&ContactRecord> {
        self.position(name)
            .map(|index| &self.records[index])
            .ok_or_else(|| Self::not_found(name))
    }

    /// Mutable access to the record stored under `name`, for phone and
    /// birthday edits. The record's name cannot be changed through it.
    pub fn get_mut(&mut self, name: &str) -> BookResult<&mut ContactRecord> {
        match self.position(name) {
            Some(index) => Ok(&mut self.records[index]),
            None => Err(Self::not_found(name)),
        }
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// `BookError::ContactNotFound` if no such contact exists.
    pub fn remove_contact(&mut self, name: &str) -> BookResult<ContactRecord> {
        let index = self.position(name).ok_or_else(|| Self::not_found(name))?;
        let record = self.records.remove(index);
        tracing::debug!(contact = %record.name(), "Contact removed");
        Ok(record)
    }

    /// Read-only view of every `(name, record)` pair in insertion order.
    pub fn list_contacts(&self) -> impl ExactSizeIterator<Item = (&str, &ContactRecord)> + '_ {
        self.records.iter().map(|r| (r.name().as_str(), r))
    }

    /// Records with a phone containing `fragment`.
    ///
    /// A record appears once per matching phone, so a record holding two
    /// matching phones is listed twice.
    pub fn search_by_number(&self, fragment: &str) -> Vec<&ContactRecord> {
        self.records
            .iter()
            .flat_map(|record| {
                record
                    .phones()
                    .iter()
                    .filter(move |phone| phone.contains(fragment))
                    .map(move |_| record)
            })
            .collect()
    }

    /// Records whose name contains `fragment`, ignoring case.
    pub fn search_by_name(&self, fragment: &str) -> Vec<&ContactRecord> {
        let needle = fragment.to_uppercase();
        self.records
            .iter()
            .filter(|record| record.name().as_str().to_uppercase().contains(&needle))
            .collect()
    }

    /// Chunks of at most [`batch_size`](Self::batch_size) entries.
    pub fn batches(&self) -> Batches<'_> {
        Batches::new(&self.records, self.batch_size.get())
    }

    /// Like [`batches`](Self::batches), but first stores `batch_size` as the
    /// book's batch size when one is given. The new size stays in effect for
    /// later iterations.
    pub fn iterate_batches(&mut self, batch_size: Option<NonZeroUsize>) -> Batches<'_> {
        if let Some(batch_size) = batch_size {
            self.set_batch_size(batch_size);
        }
        self.batches()
    }

    /// Replace the whole content with `records`, applying the usual
    /// overwrite rule to repeated names.
    fn replace_records(&mut self, records: Vec<ContactRecord>) {
        self.records.clear();
        for record in records {
            self.add_record(record);
        }
    }

    /// Append a snapshot of the current content to the file at `path`.
    ///
    /// Every call adds a new frame; earlier snapshots in the file are kept.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> BookResult<()> {
        snapshot::append(path.as_ref(), &self.records)
    }

    /// Replace the content with the first snapshot stored at `path`.
    ///
    /// On error the book is left unchanged.
    pub fn load_snapshot(&mut self, path: impl AsRef<Path>) -> BookResult<()> {
        let records = snapshot::read_first(path.as_ref())?;
        tracing::info!(path = %path.as_ref().display(), contacts = records.len(), "Snapshot loaded");
        self.replace_records(records);
        Ok(())
    }

    /// Replace the content with the most recent snapshot stored at `path`.
    pub fn load_latest_snapshot(&mut self, path: impl AsRef<Path>) -> BookResult<()> {
        let records = snapshot::read_latest(path.as_ref())?;
        tracing::info!(path = %path.as_ref().display(), contacts = records.len(), "Latest snapshot loaded");
        self.replace_records(records);
        Ok(())
    }

    /// Write the CSV table of all contacts, overwriting `path`.
    pub fn export_csv(&self, path: impl AsRef<Path>) -> BookResult<()> {
        csv_table::export(path.as_ref(), &self.records)
    }

    /// Read a CSV table as raw rows keyed by `name`, `birthday` and `phones`.
    ///
    /// This does not touch the book.
    pub fn import_csv_rows(path: impl AsRef<Path>) -> BookResult<Vec<HashMap<String, String>>> {
        csv_table::import_rows(path.as_ref())
    }

    /// Add every valid row of a CSV table to the book.
    ///
    /// Rows with an invalid name, phone or birthday are skipped. Birthdays
    /// are judged against `clock`.
    pub fn import_csv(
        &mut self,
        path: impl AsRef<Path>,
        clock: &dyn Clock,
    ) -> BookResult<ImportSummary> {
        let import = csv_table::import_records(path.as_ref(), clock)?;
        let summary = ImportSummary {
            imported: import.records.len(),
            skipped: import.skipped,
        };
        for record in import.records {
            self.add_record(record);
        }
        Ok(summary)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = Batch<'a>;
    type IntoIter = Batches<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.batches()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phones: &[&str]) -> ContactRecord {
        ContactRecord::new(
            PersonName::new(name).unwrap(),
            phones.iter().map(|p| PhoneNumber::new(*p).unwrap()).collect(),
            None,
        )
    }

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_default_batch_size() {
        assert_eq!(AddressBook::default().batch_size().get(), 1);
    }

    #[test]
    fn test_add_and_get() {
        let mut book = AddressBook::default();
        book.add_record(record("bill", &["1234567890"]));

        assert_eq!(book.len(), 1);
        assert!(book.contains("bILL"));
        assert_eq!(book.get_contact("bill").unwrap()[0].as_str(), "1234567890");
        assert_eq!(book.get("Bill").unwrap().name().as_str(), "Bill");
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut book = AddressBook::default();
        book.add_record(record("bill", &["1234567890"]));
        book.add_record(record("ann", &["1111111111"]));
        book.add_record(record("BILL", &["2222222222"]));

        let names: Vec<&str> = book.list_contacts().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Bill", "Ann"]);
        assert_eq!(book.get_contact("bill").unwrap()[0].as_str(), "2222222222");
    }

    #[test]
    fn test_missing_contact_errors() {
        let mut book = AddressBook::default();
        assert!(matches!(
            book.get_contact("nobody"),
            Err(BookError::ContactNotFound(name)) if name == "Nobody"
        ));
        assert!(matches!(
            book.remove_contact("nobody"),
            Err(BookError::ContactNotFound(_))
        ));
        assert!(book.get_mut("nobody").is_err());
    }

    #[test]
    fn test_remove_contact() {
        let mut book = AddressBook::default();
        book.add_record(record("bill", &["1234567890"]));
        book.add_record(record("ann", &[]));

        let removed = book.remove_contact("BILL").unwrap();
        assert_eq!(removed.name().as_str(), "Bill");
        assert_eq!(book.len(), 1);
        assert!(!book.contains("bill"));
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut book = AddressBook::default();
        book.add_record(record("bill", &["1234567890"]));

        book.get_mut("bill")
            .unwrap()
            .edit_phone("1234567890", "0987654321")
            .unwrap();
        assert_eq!(book.get_contact("bill").unwrap()[0].as_str(), "0987654321");
    }

    #[test]
    fn test_search_by_number_repeats_per_phone() {
        let mut book = AddressBook::default();
        book.add_record(record("bill", &["1234567890", "1234567899"]));
        book.add_record(record("ann", &["5555555555"]));

        let hits = book.search_by_number("234");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|r| r.name().as_str() == "Bill"));

        assert!(book.search_by_number("000").is_empty());
    }

    #[test]
    fn test_search_by_name_ignores_case() {
        let mut book = AddressBook::default();
        book.add_record(record("bill", &[]));
        book.add_record(record("ann", &[]));
        book.add_record(record("billy", &[]));

        let names: Vec<&str> = book
            .search_by_name("iLl")
            .iter()
            .map(|r| r.name().as_str())
            .collect();
        assert_eq!(names, vec!["Bill", "Billy"]);
        assert_eq!(book.search_by_name("").len(), 3);
    }

    #[test]
    fn test_iterate_batches_persists_size() {
        let mut book = AddressBook::default();
        for name in ["a", "b", "c"] {
            book.add_record(record(name, &[]));
        }

        let sizes: Vec<usize> = book.iterate_batches(Some(size(2))).map(|b| b.len()).collect();
        assert_eq!(sizes, vec![2, 1]);
        assert_eq!(book.batch_size().get(), 2);

        let sizes: Vec<usize> = book.iterate_batches(None).map(|b| b.len()).collect();
        assert_eq!(sizes, vec![2, 1]);
    }

    #[test]
    fn test_batches_on_empty_book() {
        let book = AddressBook::default();
        assert_eq!(book.batches().count(), 0);
    }

    #[test]
    fn test_into_iterator_yields_batches() {
        let mut book = AddressBook::new(size(2));
        book.add_record(record("a", &[]));
        book.add_record(record("b", &[]));

        let mut seen = Vec::new();
        for batch in &book {
            for (name, _) in batch {
                seen.push(name.to_string());
            }
        }
        assert_eq!(seen, vec!["A", "B"]);
    }
}
