//! Compiler for the BibleBooksCodes TSV table
//!
//! This module turns the raw tab-separated table into a frozen [`BookRegistry`].
//! Compilation is a single sequential pass that either completes
//! deterministically or fails with the first fatal table error.
//!
//! ## Architecture
//!
//! The compiler is organized into logical components:
//! - [`schema`] - Header line validation (BOM stripping, column layout)
//! - [`column_mapping`] - Column name to cell lookup for one data row
//! - [`field_parsers`] - Typed cell parsing (optional text, integers, lists)
//! - [`record_parser`] - One row to one [`BookRecord`](crate::BookRecord)
//! - [`context`] - Scoped build state discarded once compilation succeeds
//! - [`compiler`] - Orchestration of the whole pass
//! - [`stats`] - The compile summary
//!
//! ## Usage
//!
//! ```rust
//! use books_codes::TableCompiler;
//!
//! # fn example(tsv: &str) -> books_codes::Result<()> {
//! let (registry, summary) = TableCompiler::default().compile(tsv)?;
//! println!("{}", summary.summary());
//! assert_eq!(registry.record_count(), summary.records_compiled);
//! # Ok(())
//! # }
//! ```
//!
//! [`BookRegistry`]: crate::BookRegistry

pub mod column_mapping;
pub mod compiler;
pub mod context;
pub mod field_parsers;
pub mod record_parser;
pub mod schema;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::{ColumnMapping, RawRow};
pub use compiler::TableCompiler;
pub use stats::CompileSummary;
