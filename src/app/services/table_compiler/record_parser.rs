//! Individual row parsing for the books codes table
//!
//! This module converts one validated row into a canonical [`BookRecord`],
//! coercing empty optional cells to absent values, parsing numeric cells and
//! splitting list cells.

use tracing::error;

use super::column_mapping::RawRow;
use super::field_parsers::{
    parse_chapter_count, parse_list, parse_numeric_text, parse_optional_text, parse_optional_u16,
    parse_raw_number, parse_required_list, parse_required_text, parse_required_u16,
};
use crate::app::models::{BookRecord, Scheme, SchemeAbbreviations, SchemeNumbers};
use crate::constants::columns;
use crate::{Error, Result};

/// Check that a row carries exactly the expected number of cells
///
/// A mismatch indicates a corrupt table. It is logged at error level here and
/// the caller must not emit a registry once any row failed this check.
pub fn check_row_shape(row: &RawRow<'_>, expected: usize) -> Result<()> {
    if row.cell_count() != expected {
        error!(
            "CRITICAL: row {} has {} columns instead of {}",
            row.index,
            row.cell_count(),
            expected
        );
        return Err(Error::row_shape(row.index, expected, row.cell_count()));
    }
    Ok(())
}

/// Parse a single book record from a row
pub fn parse_book_record(row: &RawRow<'_>) -> Result<BookRecord> {
    // Identity fields
    let original_language_code = parse_required_text(row, columns::ORIGINAL_LANGUAGE_CODE)?;
    let original_language_name = parse_required_text(row, columns::BOOK_NAME)?;
    let english_guide_name = parse_required_text(row, columns::BOOK_NAME_ENGLISH_GUIDE)?;
    let reference_code = parse_required_text(row, columns::REFERENCE_ABBREVIATION)?;
    let reference_number = parse_required_u16(row, columns::REFERENCE_NUMBER)?;
    let sequence_number = parse_required_u16(row, columns::SEQUENCE_NUMBER)?;
    let expected_chapters = parse_chapter_count(row, columns::EXPECTED_CHAPTERS)?;

    let abbreviations = parse_abbreviations(row)?;
    let numbers = parse_numbers(row)?;

    // List and classification fields
    let alternate_abbreviations = parse_list(row, columns::ALTERNATIVE_ABBREVIATIONS)?;
    let alternate_record_codes = parse_list(row, columns::ALTERNATIVE_BOOKS_CODES)?;
    let composite_of = parse_optional_text(row, columns::CONSISTS_OF_BOOKS)?;
    let typical_section = parse_optional_text(row, columns::TYPICAL_SECTION)?;
    let typical_subsection = parse_optional_text(row, columns::TYPICAL_SUBSECTION)?;
    let english_derived_aliases =
        parse_required_list(row, columns::ENGLISH_DERIVED_ABBREVIATIONS)?;

    Ok(BookRecord {
        original_language_code,
        original_language_name,
        english_guide_name,
        reference_code,
        reference_number,
        sequence_number,
        expected_chapters,
        abbreviations,
        numbers,
        alternate_abbreviations,
        alternate_record_codes,
        composite_of,
        typical_section,
        typical_subsection,
        english_derived_aliases,
    })
}

fn parse_abbreviations(row: &RawRow<'_>) -> Result<SchemeAbbreviations> {
    let mut abbreviations = SchemeAbbreviations::default();
    for scheme in Scheme::ALL {
        *abbreviations.slot_mut(scheme) = parse_optional_text(row, scheme.column())?;
    }
    Ok(abbreviations)
}

fn parse_numbers(row: &RawRow<'_>) -> Result<SchemeNumbers> {
    // A USFM abbreviation without a USFM number is allowed (e.g. 'PSo')
    let (usfm_text, usfm) = parse_raw_number(row, columns::USFM_NUMBER)?;
    let (usx_text, usx) = parse_numeric_text(row, columns::USX_NUMBER)?;

    Ok(SchemeNumbers {
        ccel: parse_optional_u16(row, columns::CCEL_NUMBER)?,
        usfm_text,
        usfm,
        usx_text,
        usx,
        bibledit: parse_optional_u16(row, columns::BIBLEDIT_NUMBER)?,
        logos: parse_optional_u16(row, columns::LOGOS_NUMBER)?,
    })
}
