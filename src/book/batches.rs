//! Chunked iteration over address book entries.

use crate::models::ContactRecord;
use std::iter::FusedIterator;
use std::slice::Chunks;

/// One chunk of `(name, record)` pairs.
pub type Batch<'a> = Vec<(&'a str, &'a ContactRecord)>;

/// Iterator over insertion-ordered chunks of at most `batch_size` entries.
///
/// Each call to [`AddressBook::batches`](crate::AddressBook::batches) starts
/// a fresh, independent sequence.
#[derive(Debug, Clone)]
pub struct Batches<'a> {
    chunks: Chunks<'a, ContactRecord>,
}

impl<'a> Batches<'a> {
    pub(crate) fn new(records: &'a [ContactRecord], batch_size: usize) -> Self {
        Self {
            chunks: records.chunks(batch_size),
        }
    }
}

impl<'a> Iterator for Batches<'a> {
    type Item = Batch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(|chunk| {
            chunk
                .iter()
                .map(|record| (record.name().as_str(), record))
                .collect()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Batches<'_> {}

impl FusedIterator for Batches<'_> {}
