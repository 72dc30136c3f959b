//! Test utilities for table compiler testing
//!
//! This module provides table fixtures and row builders used across the
//! compiler and registry test modules.

use crate::constants::{EXPECTED_COLUMNS, columns};
use std::collections::HashMap;


/// Builder for one data row of the books codes table
#[derive(Debug, Clone)]
pub struct TestRow {
    cells: HashMap<&'static str, String>,
}

impl TestRow {
    /// Row with the mandatory cells filled and every optional cell empty
    pub fn new(
        reference_code: &str,
        reference_number: u16,
        sequence_number: u16,
        aliases: &str,
    ) -> Self {
        let mut cells = HashMap::new();
        cells.insert(columns::ORIGINAL_LANGUAGE_CODE, "Heb".to_string());
        cells.insert(columns::BOOK_NAME, format!("{} original", reference_code));
        cells.insert(columns::BOOK_NAME_ENGLISH_GUIDE, format!("{} guide", reference_code));
        cells.insert(columns::REFERENCE_ABBREVIATION, reference_code.to_string());
        cells.insert(columns::REFERENCE_NUMBER, reference_number.to_string());
        cells.insert(columns::SEQUENCE_NUMBER, sequence_number.to_string());
        cells.insert(columns::ENGLISH_DERIVED_ABBREVIATIONS, aliases.to_string());
        Self { cells }
    }

    /// Set one cell
    pub fn with(mut self, column: &'static str, value: &str) -> Self {
        self.cells.insert(column, value.to_string());
        self
    }

    /// Render the row as a tab-separated line in column order
    pub fn to_line(&self) -> String {
        EXPECTED_COLUMNS
            .iter()
            .map(|column| self.cells.get(column).map(|s| s.as_str()).unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// The expected header line
pub fn header_line() -> String {
    EXPECTED_COLUMNS.join("\t")
}

/// Header plus the given rows, newline-terminated
pub fn build_table(rows: &[TestRow]) -> String {
    let mut table = header_line();
    table.push('\n');
    for row in rows {
        table.push_str(&row.to_line());
        table.push('\n');
    }
    table
}

/// Genesis row with a realistic set of scheme abbreviations
pub fn genesis_row() -> TestRow {
    TestRow::new("GEN", 1, 1, "Genesis")
        .with(columns::BOOK_NAME, "בראשית")
        .with(columns::BOOK_NAME_ENGLISH_GUIDE, "Genesis")
        .with(columns::EXPECTED_CHAPTERS, "50")
        .with(columns::SHORT_ABBREVIATION, "Gen")
        .with(columns::SBL_ABBREVIATION, "Gen")
        .with(columns::OSIS_ABBREVIATION, "Gen")
        .with(columns::SWORD_ABBREVIATION, "Gen")
        .with(columns::CCEL_NUMBER, "1")
        .with(columns::USFM_ABBREVIATION, "Gen")
        .with(columns::USFM_NUMBER, "01")
        .with(columns::USX_NUMBER, "1")
        .with(columns::TYPICAL_SECTION, "OT")
        .with(columns::TYPICAL_SUBSECTION, "Torah")
}

/// Exodus row with two aliases
pub fn exodus_row() -> TestRow {
    TestRow::new("EXO", 2, 2, "Exodus,2Mo")
        .with(columns::BOOK_NAME_ENGLISH_GUIDE, "Exodus")
        .with(columns::EXPECTED_CHAPTERS, "40")
        .with(columns::SHORT_ABBREVIATION, "Exo")
        .with(columns::OSIS_ABBREVIATION, "Exod")
        .with(columns::USFM_ABBREVIATION, "Exo")
        .with(columns::USFM_NUMBER, "02")
        .with(columns::USX_NUMBER, "2")
        .with(columns::TYPICAL_SECTION, "OT")
}

/// Two-row table: GEN then EXO
pub fn genesis_exodus_table() -> String {
    build_table(&[genesis_row(), exodus_row()])
}

/// A small table covering duplicates, pairs of chapter counts and ordinals
pub fn sample_table() -> String {
    build_table(&[
        genesis_row(),
        exodus_row(),
        TestRow::new("SA1", 9, 3, "1Sam,1 Samuel,1SAMUEL")
            .with(columns::EXPECTED_CHAPTERS, "31")
            .with(columns::USFM_ABBREVIATION, "1Sa")
            .with(columns::OSIS_ABBREVIATION, "1Sam")
            .with(columns::TYPICAL_SECTION, "OT"),
        TestRow::new("SAM", 109, 4, "Samuel,1Sam")
            .with(columns::CONSISTS_OF_BOOKS, "SA1,SA2")
            .with(columns::USFM_ABBREVIATION, "1Sa")
            .with(columns::TYPICAL_SECTION, "OT"),
        TestRow::new("EST", 17, 5, "Esther,Ester,Est")
            .with(columns::EXPECTED_CHAPTERS, "10,16")
            .with(columns::USFM_ABBREVIATION, "Est")
            .with(columns::ALTERNATIVE_BOOKS_CODES, "ESG,ESC")
            .with(columns::TYPICAL_SECTION, "OT"),
        TestRow::new("CO1", 46, 6, "1Cor,1Co,1CORINTHIANS")
            .with(columns::EXPECTED_CHAPTERS, "16")
            .with(columns::USFM_ABBREVIATION, "1Co")
            .with(columns::USFM_NUMBER, "47")
            .with(columns::OSIS_ABBREVIATION, "1Cor")
            .with(columns::ALTERNATIVE_ABBREVIATIONS, "1Cor,ICor")
            .with(columns::TYPICAL_SECTION, "NT"),
        TestRow::new("JDE", 65, 7, "Jude,Jud")
            .with(columns::EXPECTED_CHAPTERS, "1")
            .with(columns::USFM_ABBREVIATION, "Jud")
            .with(columns::OSIS_ABBREVIATION, "Jude")
            .with(columns::TYPICAL_SECTION, "NT"),
        TestRow::new("LAO", 84, 8, "Laodiceans,Lao")
            .with(columns::EXPECTED_CHAPTERS, "1")
            .with(columns::USFM_ABBREVIATION, "LAO")
            .with(columns::USFM_NUMBER, "A4")
            .with(columns::OSIS_ABBREVIATION, "EpLao")
            .with(columns::SWORD_ABBREVIATION, "Laod")
            .with(columns::TYPICAL_SECTION, "DC"),
    ])
}
