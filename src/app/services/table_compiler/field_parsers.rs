//! Field parsing utilities for books codes rows
//!
//! Every helper maps an empty cell to "absent" and reports format violations
//! as `MalformedField` errors carrying the row and column.

use super::column_mapping::RawRow;
use crate::app::models::ChapterCount;
use crate::constants::{LIST_DELIMITER, MAX_CHAPTER_COUNTS};
use crate::{Error, Result};

/// Parse a mandatory text field
pub fn parse_required_text(row: &RawRow<'_>, column: &str) -> Result<String> {
    let value = row.get(column)?;
    if value.is_empty() {
        return Err(Error::malformed_field(
            row.index,
            column,
            "required value is empty",
        ));
    }
    Ok(value.to_string())
}

/// Parse an optional text field, treating an empty cell as absent
pub fn parse_optional_text(row: &RawRow<'_>, column: &str) -> Result<Option<String>> {
    let value = row.get(column)?;
    Ok((!value.is_empty()).then(|| value.to_string()))
}

/// Parse a mandatory u16 field
pub fn parse_required_u16(row: &RawRow<'_>, column: &str) -> Result<u16> {
    parse_optional_u16(row, column)?
        .ok_or_else(|| Error::malformed_field(row.index, column, "required number is empty"))
}

/// Parse an optional u16 field; a present but non-numeric value is an error
pub fn parse_optional_u16(row: &RawRow<'_>, column: &str) -> Result<Option<u16>> {
    let value = row.get(column)?;
    if value.is_empty() {
        return Ok(None);
    }
    parse_number(row.index, column, value).map(Some)
}

/// Parse a numeric code that is kept as raw text
///
/// Any non-empty text is accepted. The typed value is only present when the
/// text happens to be numeric.
pub fn parse_raw_number(row: &RawRow<'_>, column: &str) -> Result<(Option<String>, Option<u16>)> {
    let value = row.get(column)?;
    if value.is_empty() {
        return Ok((None, None));
    }
    let typed = value.trim().parse::<u16>().ok();
    Ok((Some(value.to_string()), typed))
}

/// Parse a numeric code, keeping its source text alongside the value
///
/// Unlike [`parse_raw_number`], a present but non-numeric value is an error.
pub fn parse_numeric_text(row: &RawRow<'_>, column: &str) -> Result<(Option<String>, Option<u16>)> {
    let value = row.get(column)?;
    if value.is_empty() {
        return Ok((None, None));
    }
    let typed = parse_number(row.index, column, value)?;
    Ok((Some(value.to_string()), Some(typed)))
}

/// Parse an optional comma-delimited list; an empty cell is an empty list
pub fn parse_list(row: &RawRow<'_>, column: &str) -> Result<Vec<String>> {
    let value = row.get(column)?;
    Ok(split_list(value))
}

/// Parse a comma-delimited list that must hold at least one entry
pub fn parse_required_list(row: &RawRow<'_>, column: &str) -> Result<Vec<String>> {
    let value = row.get(column)?;
    if value.is_empty() {
        return Err(Error::malformed_field(
            row.index,
            column,
            "at least one entry is required",
        ));
    }
    Ok(split_list(value))
}

/// Parse the expected chapters cell: empty, one number, or two numbers
pub fn parse_chapter_count(row: &RawRow<'_>, column: &str) -> Result<Option<ChapterCount>> {
    let value = row.get(column)?;
    if value.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = value.split(LIST_DELIMITER).collect();
    match parts.as_slice() {
        [single] => Ok(Some(ChapterCount::Single(parse_number(
            row.index, column, single,
        )?))),
        [first, second] => Ok(Some(ChapterCount::Pair([
            parse_number(row.index, column, first)?,
            parse_number(row.index, column, second)?,
        ]))),
        _ => Err(Error::malformed_field(
            row.index,
            column,
            format!(
                "'{}' holds {} counts, at most {} are allowed",
                value,
                parts.len(),
                MAX_CHAPTER_COUNTS
            ),
        )),
    }
}

/// Split a list cell on the delimiter without any further trimming
pub fn split_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(LIST_DELIMITER).map(|s| s.to_string()).collect()
}

fn parse_number(row: usize, column: &str, value: &str) -> Result<u16> {
    value.trim().parse::<u16>().map_err(|e| {
        Error::malformed_field(
            row,
            column,
            format!("invalid number '{}' ({})", value, e),
        )
    })
}
