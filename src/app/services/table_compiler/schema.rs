//! Header line validation for the source table
//!
//! The header must match the expected column layout verbatim before any data
//! row is looked at. A mismatch means the row parsing assumptions no longer
//! hold, so it aborts compilation.

use crate::config::CompilerConfig;
use crate::constants::{BYTE_ORDER_MARK, FIELD_DELIMITER};
use crate::{Error, Result};
use tracing::debug;

/// Remove a leading byte order mark, if present
pub fn strip_bom(text: &str) -> &str {
    match text.strip_prefix(BYTE_ORDER_MARK) {
        Some(stripped) => {
            debug!("Stripped byte order mark from start of table");
            stripped
        }
        None => text,
    }
}

/// Split table text into its header line and the remaining data section
pub fn split_header(text: &str) -> (&str, &str) {
    match text.split_once('\n') {
        Some((header, body)) => (header, body),
        None => (text, ""),
    }
}

/// Validate the header line against the configured columns
///
/// Surrounding whitespace (including a trailing `\r`) is ignored. Returns the
/// header's column names on success.
pub fn validate_header(header_line: &str, config: &CompilerConfig) -> Result<Vec<String>> {
    let header_line = header_line.trim();
    let delimiter = char::from(FIELD_DELIMITER);
    let actual_columns: Vec<String> = header_line
        .split(delimiter)
        .map(|s| s.to_string())
        .collect();
    let expected_header = config.expected_header();
    let expected_count = config.expected_columns.len();

    if header_line != expected_header || actual_columns.len() != expected_count {
        return Err(Error::schema_mismatch(
            expected_header,
            header_line,
            expected_count,
            actual_columns.len(),
        ));
    }

    debug!("Header validated: {} columns", actual_columns.len());
    Ok(actual_columns)
}
