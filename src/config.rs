//! Configuration management and validation.
//!
//! Provides the compiler configuration: the expected table layout, BOM
//! handling and which optional indices are built alongside the mandatory ones.

use crate::app::models::Scheme;
use crate::constants::EXPECTED_COLUMNS;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Configuration for compiling the books codes table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Column names the header line must carry, in order
    pub expected_columns: Vec<String>,

    /// Strip a leading byte order mark from the header line
    pub strip_bom: bool,

    /// Schemes that get an upper-cased index variant for case-insensitive lookups
    pub case_insensitive_schemes: Vec<Scheme>,

    /// Build the reference number index
    pub index_reference_numbers: bool,

    /// Build the upper-cased alias index used for English name resolution
    pub index_english_names: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            expected_columns: EXPECTED_COLUMNS.iter().map(|s| s.to_string()).collect(),
            strip_bom: true,
            case_insensitive_schemes: Scheme::ALL.to_vec(),
            index_reference_numbers: true,
            index_english_names: true,
        }
    }
}

impl CompilerConfig {
    /// Create configuration with a custom column layout
    pub fn with_expected_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Keep a leading byte order mark (it will then fail header validation)
    pub fn without_bom_stripping(mut self) -> Self {
        self.strip_bom = false;
        self
    }

    /// Only build case-insensitive variants for the given schemes
    pub fn with_case_insensitive_schemes(mut self, schemes: impl Into<Vec<Scheme>>) -> Self {
        self.case_insensitive_schemes = schemes.into();
        self
    }

    /// Skip the reference number index
    pub fn without_reference_number_index(mut self) -> Self {
        self.index_reference_numbers = false;
        self
    }

    /// Skip the upper-cased alias index
    pub fn without_english_name_index(mut self) -> Self {
        self.index_english_names = false;
        self
    }

    /// Full header line the source table must start with
    pub fn expected_header(&self) -> String {
        self.expected_columns.join("\t")
    }

    /// True if the scheme gets a case-insensitive index variant
    pub fn is_case_insensitive(&self, scheme: Scheme) -> bool {
        self.case_insensitive_schemes.contains(&scheme)
    }

    /// Validate the configuration before compiling
    pub fn validate(&self) -> Result<()> {
        if self.expected_columns.is_empty() {
            return Err(Error::configuration("Expected column list cannot be empty"));
        }

        let mut seen = HashSet::new();
        for column in &self.expected_columns {
            if column.trim().is_empty() {
                return Err(Error::configuration("Column names cannot be empty"));
            }
            if !seen.insert(column.as_str()) {
                return Err(Error::configuration(format!(
                    "Duplicate column name '{}' in expected columns",
                    column
                )));
            }
        }

        if let Some(missing) = EXPECTED_COLUMNS
            .iter()
            .find(|column| !seen.contains(**column))
        {
            return Err(Error::configuration(format!(
                "Expected columns lack the required column '{}'",
                missing
            )));
        }

        debug!(
            "Compiler config: {} columns, {} case-insensitive schemes",
            self.expected_columns.len(),
            self.case_insensitive_schemes.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NUM_EXPECTED_COLUMNS;

    #[test]
    fn test_default_config_is_valid() {
        let config = CompilerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.expected_columns.len(), NUM_EXPECTED_COLUMNS);
        assert!(config.strip_bom);
        assert!(config.is_case_insensitive(Scheme::Usfm));
    }

    #[test]
    fn test_expected_header_is_tab_joined() {
        let config = CompilerConfig::default().with_expected_columns(["a", "b", "c"]);
        assert_eq!(config.expected_header(), "a\tb\tc");
    }

    #[test]
    fn test_builders() {
        let config = CompilerConfig::default()
            .without_bom_stripping()
            .with_case_insensitive_schemes([Scheme::Usfm])
            .without_reference_number_index()
            .without_english_name_index();

        assert!(!config.strip_bom);
        assert!(config.is_case_insensitive(Scheme::Usfm));
        assert!(!config.is_case_insensitive(Scheme::Osis));
        assert!(!config.index_reference_numbers);
        assert!(!config.index_english_names);
    }

    #[test]
    fn test_validate_rejects_empty_columns() {
        let config = CompilerConfig::default().with_expected_columns(Vec::<String>::new());
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_columns() {
        let config = CompilerConfig::default().with_expected_columns(["a", "b", "a"]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate column name 'a'"));
    }

    #[test]
    fn test_validate_rejects_layout_missing_a_required_column() {
        let columns = EXPECTED_COLUMNS
            .iter()
            .copied()
            .filter(|column| *column != "USFMAbbreviation");
        let config = CompilerConfig::default().with_expected_columns(columns);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'USFMAbbreviation'"));

        let config = CompilerConfig::default().with_expected_columns(["a", "b", "c"]);
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_extra_columns() {
        let columns = EXPECTED_COLUMNS.iter().copied().chain(["notes"]);
        let config = CompilerConfig::default().with_expected_columns(columns);
        assert!(config.validate().is_ok());
    }
}
