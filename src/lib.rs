//! Bible Books Codes Library
//!
//! A Rust library that compiles the BibleBooksCodes TSV table into an immutable,
//! multi-index in-memory registry of book records.
//!
//! This library provides tools for:
//! - Validating the TSV header against the expected 29-column layout
//! - Normalizing each row into a strongly-typed [`BookRecord`]
//! - Building first-wins exact-match indices over reference codes, scheme
//!   abbreviations (USFM, OSIS, SBL, ...), reference numbers and English aliases
//! - Serving O(1) lookups from any number of concurrent readers
//! - Comprehensive error handling for malformed source tables

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod book_registry;
        pub mod table_compiler;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{BookRecord, ChapterCount, Scheme};
pub use app::services::book_registry::BookRegistry;
pub use app::services::table_compiler::{CompileSummary, TableCompiler};
pub use config::CompilerConfig;

/// Result type alias for the books codes compiler
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for table compilation and registry lookups
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// TSV tokenizing error
    #[error("TSV parsing error: {message}")]
    CsvParsing {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Header line does not match the expected column layout
    #[error(
        "Schema mismatch: expected {expected_columns} columns, found {actual_columns}\n  expected header: {expected_header:?}\n  actual header:   {actual_header:?}"
    )]
    SchemaMismatch {
        expected_header: String,
        actual_header: String,
        expected_columns: usize,
        actual_columns: usize,
    },

    /// A data row has the wrong number of cells
    #[error("Row {row} has {found} columns instead of {expected}")]
    RowShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell violates the format contract of its column
    #[error("Malformed field '{column}' in row {row}: {message}")]
    MalformedField {
        row: usize,
        column: String,
        message: String,
    },

    /// A reference code occurs more than once
    #[error("Duplicate reference code '{key}' in rows {first_row} and {second_row}")]
    DuplicateKey {
        key: String,
        first_row: usize,
        second_row: usize,
    },

    /// Key not present in the requested index
    #[error("{index} key '{key}' not found")]
    RecordNotFound { index: String, key: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a TSV parsing error with context
    pub fn csv_parsing(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::CsvParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a schema mismatch error
    pub fn schema_mismatch(
        expected_header: impl Into<String>,
        actual_header: impl Into<String>,
        expected_columns: usize,
        actual_columns: usize,
    ) -> Self {
        Self::SchemaMismatch {
            expected_header: expected_header.into(),
            actual_header: actual_header.into(),
            expected_columns,
            actual_columns,
        }
    }

    /// Create a row shape error
    pub fn row_shape(row: usize, expected: usize, found: usize) -> Self {
        Self::RowShape {
            row,
            expected,
            found,
        }
    }

    /// Create a malformed field error
    pub fn malformed_field(
        row: usize,
        column: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedField {
            row,
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate reference code error
    pub fn duplicate_key(key: impl Into<String>, first_row: usize, second_row: usize) -> Self {
        Self::DuplicateKey {
            key: key.into(),
            first_row,
            second_row,
        }
    }

    /// Create a record not found error
    pub fn record_not_found(index: impl Into<String>, key: impl Into<String>) -> Self {
        Self::RecordNotFound {
            index: index.into(),
            key: key.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for the errors that describe a malformed source table
    pub fn is_table_error(&self) -> bool {
        matches!(
            self,
            Self::SchemaMismatch { .. }
                | Self::RowShape { .. }
                | Self::MalformedField { .. }
                | Self::DuplicateKey { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            message: "TSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
