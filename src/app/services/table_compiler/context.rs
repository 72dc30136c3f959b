//! Scoped build state for one compilation pass
//!
//! Everything that has to be tracked while rows are being accumulated lives
//! here and is dropped when compilation finishes. Nothing outlives the pass
//! except the frozen store and indices.

use super::column_mapping::RawRow;
use crate::app::services::book_registry::{RecordStore, StoreBuilder};
use crate::{Error, Result};
use std::collections::BTreeSet;

/// Mutable state threaded through row normalization
#[derive(Debug, Default)]
pub struct BuildContext {
    /// Records accumulated so far, with duplicate detection
    pub store: StoreBuilder,

    /// Columns that had at least one empty cell
    pub absent_columns: BTreeSet<String>,

    /// Data rows seen, including rejected ones
    pub rows_read: usize,

    /// Row shape anomalies, in row order
    shape_errors: Vec<Error>,
}

impl BuildContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track which columns of this row are empty
    pub fn record_absent(&mut self, row: &RawRow<'_>) {
        for column in row.empty_columns() {
            if !self.absent_columns.contains(column) {
                self.absent_columns.insert(column.to_string());
            }
        }
    }

    /// Remember a row shape anomaly; the pass keeps scanning so every bad row gets logged
    pub fn note_shape_error(&mut self, error: Error) {
        self.shape_errors.push(error);
    }

    pub fn has_shape_errors(&self) -> bool {
        !self.shape_errors.is_empty()
    }

    pub fn shape_error_count(&self) -> usize {
        self.shape_errors.len()
    }

    /// Freeze the store, failing with the first row shape anomaly if any occurred
    pub fn finish(self) -> Result<(RecordStore, BTreeSet<String>, usize)> {
        if let Some(first) = self.shape_errors.into_iter().next() {
            return Err(first);
        }
        Ok((self.store.finish(), self.absent_columns, self.rows_read))
    }
}
