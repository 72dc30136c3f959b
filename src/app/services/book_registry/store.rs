//! Ordered, immutable record storage
//!
//! Records are accumulated in strict row order by a [`StoreBuilder`] and then
//! frozen into a [`RecordStore`]. A record's position in the store is its
//! row order, which is what every index maps to.

use crate::app::models::BookRecord;
use crate::constants::columns;
use crate::{Error, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Frozen, ordered sequence of book records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<BookRecord>,
}

impl RecordStore {
    /// Start accumulating records
    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at the given position
    pub fn get(&self, position: usize) -> Option<&BookRecord> {
        self.records.get(position)
    }

    /// Record with the given sequence number
    ///
    /// Sequence numbers are dense, so this is positional access offset by the
    /// first record's sequence number.
    pub fn get_by_sequence_number(&self, sequence_number: u16) -> Option<&BookRecord> {
        let base = self.records.first()?.sequence_number;
        let position = sequence_number.checked_sub(base)?;
        self.records.get(usize::from(position))
    }

    /// All records in sequence order
    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    /// Iterate over `(position, record)` pairs in sequence order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BookRecord)> {
        self.records.iter().enumerate()
    }
}

/// Accumulates records in row order, rejecting duplicate reference codes
#[derive(Debug, Default)]
pub struct StoreBuilder {
    records: Vec<BookRecord>,
    rows_by_code: HashMap<String, usize>,
}

impl StoreBuilder {
    /// Append the record parsed from `row`, returning its position
    ///
    /// # Errors
    /// * `Error::DuplicateKey` if the reference code was already stored
    /// * `Error::MalformedField` if the sequence number does not follow the
    ///   previous record's
    pub fn push(&mut self, row: usize, record: BookRecord) -> Result<usize> {
        if let Some(previous) = self.records.last() {
            let expected = previous.sequence_number.checked_add(1);
            if expected != Some(record.sequence_number) {
                return Err(Error::malformed_field(
                    row,
                    columns::SEQUENCE_NUMBER,
                    format!(
                        "sequence number {} does not follow {}",
                        record.sequence_number, previous.sequence_number
                    ),
                ));
            }
        }

        match self.rows_by_code.entry(record.reference_code.clone()) {
            Entry::Occupied(entry) => Err(Error::duplicate_key(
                record.reference_code,
                *entry.get(),
                row,
            )),
            Entry::Vacant(entry) => {
                entry.insert(row);
                self.records.push(record);
                Ok(self.records.len() - 1)
            }
        }
    }

    /// Number of records accumulated so far
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Freeze the accumulated records
    pub fn finish(self) -> RecordStore {
        RecordStore {
            records: self.records,
        }
    }
}
