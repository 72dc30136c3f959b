//! Core table compiler implementation
//!
//! This module orchestrates the compilation pass: header validation, row
//! tokenizing, record normalization, store accumulation and index building.

use std::time::Instant;
use tracing::{debug, error, info};

use super::column_mapping::{ColumnMapping, RawRow};
use super::context::BuildContext;
use super::record_parser::{check_row_shape, parse_book_record};
use super::schema::{split_header, strip_bom, validate_header};
use super::stats::CompileSummary;
use crate::app::services::book_registry::{BookRegistry, IndexBuilder};
use crate::config::CompilerConfig;
use crate::constants::FIELD_DELIMITER;
use crate::{Error, Result};

/// Compiler from the books codes TSV table to a [`BookRegistry`]
///
/// Compilation is a deterministic function of the table text: compiling the
/// same text twice yields the same records in the same order and the same
/// index contents.
#[derive(Debug, Clone, Default)]
pub struct TableCompiler {
    config: CompilerConfig,
}

impl TableCompiler {
    /// Create a compiler with a validated configuration
    pub fn new(config: CompilerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The compiler's configuration
    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compile table text into a registry and a compile summary
    ///
    /// # Errors
    /// * `Error::SchemaMismatch` if the header line is not the expected one
    /// * `Error::RowShape` if any row has the wrong number of cells
    /// * `Error::MalformedField` if a cell violates its column's format
    /// * `Error::DuplicateKey` if a reference code repeats
    pub fn compile(&self, text: &str) -> Result<(BookRegistry, CompileSummary)> {
        let start_time = Instant::now();

        let text = if self.config.strip_bom {
            strip_bom(text)
        } else {
            text
        };

        // Step 1: the header gates everything else
        let (header_line, body) = split_header(text);
        let columns = validate_header(header_line, &self.config)?;
        let mapping = ColumnMapping::from_columns(&columns);

        // Step 2: one record per row, in row order
        let mut context = BuildContext::new();
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(FIELD_DELIMITER)
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(body.as_bytes());

        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                Error::csv_parsing(format!("Failed to read data row {}", index), Some(e))
            })?;
            let row = RawRow::new(index, &record, &mapping);
            context.rows_read += 1;
            context.record_absent(&row);

            if let Err(e) = check_row_shape(&row, mapping.column_count()) {
                context.note_shape_error(e);
                continue;
            }
            if context.has_shape_errors() {
                // The pass is already doomed; keep scanning shapes only
                continue;
            }

            let book = parse_book_record(&row)?;
            let position = context.store.push(index, book)?;
            debug!("Row {} stored at position {}", index, position);
        }

        if context.has_shape_errors() {
            error!(
                "{} of {} rows have the wrong number of columns, refusing to build the registry",
                context.shape_error_count(),
                context.rows_read
            );
        }
        let (store, columns_with_absent_values, rows_read) = context.finish()?;
        info!("Normalized {} records from {} rows", store.len(), rows_read);

        // Step 3: indices over the frozen store
        let (indices, skipped_duplicates) = IndexBuilder::new(&self.config).build(&store);

        let summary = CompileSummary {
            rows_read,
            records_compiled: store.len(),
            index_entries: indices.entry_counts(),
            skipped_duplicates,
            columns_with_absent_values,
            compile_duration: start_time.elapsed(),
        };
        info!("{}", summary.summary());

        Ok((BookRegistry::from_parts(store, indices), summary))
    }
}
