//! Application constants for the books codes compiler
//!
//! This module contains the source table layout, delimiters and the
//! default values used throughout the compiler and the CLI.

// =============================================================================
// Source Table Layout
// =============================================================================

/// Column names of the BibleBooksCodes TSV table, in their required order
pub const EXPECTED_COLUMNS: &[&str] = &[
    columns::ORIGINAL_LANGUAGE_CODE,
    columns::BOOK_NAME,
    columns::BOOK_NAME_ENGLISH_GUIDE,
    columns::REFERENCE_ABBREVIATION,
    columns::REFERENCE_NUMBER,
    columns::SEQUENCE_NUMBER,
    columns::EXPECTED_CHAPTERS,
    columns::SHORT_ABBREVIATION,
    columns::SBL_ABBREVIATION,
    columns::OSIS_ABBREVIATION,
    columns::SWORD_ABBREVIATION,
    columns::CCEL_NUMBER,
    columns::USFM_ABBREVIATION,
    columns::USFM_NUMBER,
    columns::USX_NUMBER,
    columns::UNBOUND_CODE,
    columns::BIBLEDIT_NUMBER,
    columns::LOGOS_NUMBER,
    columns::LOGOS_ABBREVIATION,
    columns::NET_BIBLE_ABBREVIATION,
    columns::DRUPAL_BIBLE_ABBREVIATION,
    columns::BIBLE_WORKS_ABBREVIATION,
    columns::BYZANTINE_ABBREVIATION,
    columns::ALTERNATIVE_ABBREVIATIONS,
    columns::ALTERNATIVE_BOOKS_CODES,
    columns::CONSISTS_OF_BOOKS,
    columns::TYPICAL_SECTION,
    columns::TYPICAL_SUBSECTION,
    columns::ENGLISH_DERIVED_ABBREVIATIONS,
];

/// Number of columns every header and data row must carry
pub const NUM_EXPECTED_COLUMNS: usize = 29;

/// Field delimiter of the source table
pub const FIELD_DELIMITER: u8 = b'\t';

/// Delimiter inside list-valued cells
pub const LIST_DELIMITER: char = ',';

/// Unicode byte order mark that may prefix the header line
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Maximum number of values an expectedChapters cell may hold
pub const MAX_CHAPTER_COUNTS: usize = 2;

// =============================================================================
// Column Name Constants
// =============================================================================

/// Column names in the BibleBooksCodes table
pub mod columns {
    // Identity columns
    pub const ORIGINAL_LANGUAGE_CODE: &str = "originalLanguageCode";
    pub const BOOK_NAME: &str = "bookName";
    pub const BOOK_NAME_ENGLISH_GUIDE: &str = "bookNameEnglishGuide";
    pub const REFERENCE_ABBREVIATION: &str = "BOSReferenceAbbreviation";
    pub const REFERENCE_NUMBER: &str = "BOSReferenceNumber";
    pub const SEQUENCE_NUMBER: &str = "BOSSequenceNumber";
    pub const EXPECTED_CHAPTERS: &str = "expectedChapters";

    // Scheme abbreviation and number columns
    pub const SHORT_ABBREVIATION: &str = "shortAbbreviation";
    pub const SBL_ABBREVIATION: &str = "SBLAbbreviation";
    pub const OSIS_ABBREVIATION: &str = "OSISAbbreviation";
    pub const SWORD_ABBREVIATION: &str = "SwordAbbreviation";
    pub const CCEL_NUMBER: &str = "CCELNumber";
    pub const USFM_ABBREVIATION: &str = "USFMAbbreviation";
    pub const USFM_NUMBER: &str = "USFMNumber";
    pub const USX_NUMBER: &str = "USXNumber";
    pub const UNBOUND_CODE: &str = "UnboundCode";
    pub const BIBLEDIT_NUMBER: &str = "BibleditNumber";
    pub const LOGOS_NUMBER: &str = "LogosNumber";
    pub const LOGOS_ABBREVIATION: &str = "LogosAbbreviation";
    pub const NET_BIBLE_ABBREVIATION: &str = "NETBibleAbbreviation";
    pub const DRUPAL_BIBLE_ABBREVIATION: &str = "DrupalBibleAbbreviation";
    pub const BIBLE_WORKS_ABBREVIATION: &str = "BibleWorksAbbreviation";
    pub const BYZANTINE_ABBREVIATION: &str = "ByzantineAbbreviation";

    // List and classification columns
    pub const ALTERNATIVE_ABBREVIATIONS: &str = "possibleAlternativeAbbreviations";
    pub const ALTERNATIVE_BOOKS_CODES: &str = "possibleAlternativeBooksCodes";
    pub const CONSISTS_OF_BOOKS: &str = "consistsOfBooks";
    pub const TYPICAL_SECTION: &str = "typicalSection";
    pub const TYPICAL_SUBSECTION: &str = "typicalSubsection";
    pub const ENGLISH_DERIVED_ABBREVIATIONS: &str = "allEnglishDerivedAbbreviations";
}

// =============================================================================
// Index Names
// =============================================================================

/// Names used for indices in summaries and not-found errors
pub mod index_names {
    pub const REFERENCE_CODE: &str = "Reference";
    pub const REFERENCE_NUMBER: &str = "Reference number";
    pub const ALIAS: &str = "Alias";
    pub const ENGLISH_NAME: &str = "English name";
    pub const ALL_ABBREVIATIONS: &str = "All abbreviations";
}

// =============================================================================
// Logging
// =============================================================================

/// Log target used for the default env filter
pub const LOG_TARGET: &str = "books_codes";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_columns_count() {
        assert_eq!(EXPECTED_COLUMNS.len(), NUM_EXPECTED_COLUMNS);
    }

    #[test]
    fn test_expected_columns_unique() {
        let mut names: Vec<&str> = EXPECTED_COLUMNS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), NUM_EXPECTED_COLUMNS);
    }
}
