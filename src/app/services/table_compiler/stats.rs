//! Compile statistics for the books codes table
//!
//! This module provides the summary returned alongside a compiled registry,
//! recording what was read, what was indexed and which duplicate keys the
//! first-wins policy dropped.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::time::Duration;

/// Summary of one successful compilation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileSummary {
    /// Number of data rows read (header excluded)
    pub rows_read: usize,

    /// Number of records in the compiled registry
    pub records_compiled: usize,

    /// Entry count per index
    pub index_entries: BTreeMap<String, usize>,

    /// Duplicate keys skipped per index by the first-wins policy
    pub skipped_duplicates: BTreeMap<String, usize>,

    /// Columns with at least one empty (absent) cell
    pub columns_with_absent_values: BTreeSet<String>,

    /// Time taken to compile
    pub compile_duration: Duration,
}

impl CompileSummary {
    /// Total number of duplicate keys skipped across all indices
    pub fn total_skipped(&self) -> usize {
        self.skipped_duplicates.values().sum()
    }

    /// Entry count of the named index (0 if the index was not built)
    pub fn entries(&self, index_name: &str) -> usize {
        self.index_entries.get(index_name).copied().unwrap_or(0)
    }

    /// Get a summary string of the compilation
    pub fn summary(&self) -> String {
        format!(
            "Compiled {} records from {} rows into {} indices ({} duplicate keys skipped) in {:.2}ms",
            self.records_compiled,
            self.rows_read,
            self.index_entries.len(),
            self.total_skipped(),
            self.compile_duration.as_secs_f64() * 1000.0
        )
    }
}

impl fmt::Display for CompileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        writeln!(f, "Index entries:")?;
        for (name, count) in &self.index_entries {
            match self.skipped_duplicates.get(name) {
                Some(skipped) => writeln!(f, "  {:<24} {:>5} ({} skipped)", name, count, skipped)?,
                None => writeln!(f, "  {:<24} {:>5}", name, count)?,
            }
        }
        let columns: Vec<&str> = self
            .columns_with_absent_values
            .iter()
            .map(|s| s.as_str())
            .collect();
        write!(f, "Columns with absent values: {}", columns.join(", "))
    }
}
