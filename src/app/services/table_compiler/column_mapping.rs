//! Column mapping for the books codes table
//!
//! Maps validated header names to cell positions so the record parser can
//! address cells of a data row by column name.

use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Column name to index mapping built from the validated header
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,

    /// Column names in header order
    pub column_names: Vec<String>,
}

impl ColumnMapping {
    /// Build the mapping from the header's column names
    pub fn from_columns(columns: &[String]) -> Self {
        let name_to_index = columns
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), index))
            .collect();

        Self {
            name_to_index,
            column_names: columns.to_vec(),
        }
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Number of columns every row is expected to carry
    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }
}

/// One data row viewed as a mapping from column name to raw cell text
#[derive(Debug, Clone, Copy)]
pub struct RawRow<'a> {
    /// Zero-based data row index (the header is not counted)
    pub index: usize,
    record: &'a StringRecord,
    mapping: &'a ColumnMapping,
}

impl<'a> RawRow<'a> {
    pub fn new(index: usize, record: &'a StringRecord, mapping: &'a ColumnMapping) -> Self {
        Self {
            index,
            record,
            mapping,
        }
    }

    /// Raw cell text for the named column
    pub fn get(&self, column: &str) -> Result<&'a str> {
        let position = self.mapping.get_index(column).ok_or_else(|| {
            Error::malformed_field(self.index, column, "column is not present in the header")
        })?;

        self.record.get(position).ok_or_else(|| {
            Error::malformed_field(self.index, column, "row has no cell for this column")
        })
    }

    /// Number of cells in the row
    pub fn cell_count(&self) -> usize {
        self.record.len()
    }

    /// Names of columns whose cell is empty in this row
    pub fn empty_columns(&self) -> impl Iterator<Item = &'a str> + 'a {
        let mapping = self.mapping;
        self.record
            .iter()
            .zip(mapping.column_names.iter())
            .filter(|(value, _)| value.is_empty())
            .map(|(_, name)| name.as_str())
    }
}
