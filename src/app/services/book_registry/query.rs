//! Book lookup and search functionality
//!
//! This module is the read-only query surface of the registry. Every lookup
//! resolves a key through one index to a position and returns the stored
//! record. A missing key is a routine outcome and is reported as `None`; the
//! `require_*` and conversion methods turn it into a typed `RecordNotFound`.

use super::BookRegistry;
use crate::app::models::{BookRecord, Scheme};
use crate::constants::index_names;
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Leading ordinal on an English book name ("1.", "I ", "II.", ...)
static ORDINAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([1-6])\.|(VI|V|IV|I{1,3})[ .])").expect("ordinal prefix pattern is valid")
});

impl BookRegistry {
    /// Number of records in the registry
    pub fn record_count(&self) -> usize {
        self.store.len()
    }

    /// Record at the given position
    pub fn get(&self, position: usize) -> Option<&BookRecord> {
        self.store.get(position)
    }

    /// Record with the given sequence number
    pub fn get_by_sequence_number(&self, sequence_number: u16) -> Option<&BookRecord> {
        self.store.get_by_sequence_number(sequence_number)
    }

    /// All records in sequence order
    pub fn records(&self) -> &[BookRecord] {
        self.store.records()
    }

    /// Look up a record by its reference code (e.g. "GEN", "CO1")
    pub fn lookup_by_reference_code(&self, key: &str) -> Option<&BookRecord> {
        self.resolve(self.indices.reference_codes.get(key))
    }

    /// Look up a record by a scheme's abbreviation
    ///
    /// The canonical-case index is always tried first. When `case_sensitive`
    /// is false and the scheme has an upper-cased variant, the upper-cased key
    /// is tried next.
    ///
    /// # Examples
    /// ```
    /// # use books_codes::{BookRegistry, Scheme};
    /// # fn example(registry: &BookRegistry) {
    /// let exodus = registry.lookup_by_scheme_abbreviation(Scheme::Usfm, "exo", false);
    /// let strict = registry.lookup_by_scheme_abbreviation(Scheme::Usfm, "exo", true);
    /// # }
    /// ```
    pub fn lookup_by_scheme_abbreviation(
        &self,
        scheme: Scheme,
        key: &str,
        case_sensitive: bool,
    ) -> Option<&BookRecord> {
        let index = self.indices.schemes.get(&scheme)?;
        self.resolve(index.resolve(key, case_sensitive))
    }

    /// Look up a record by one of its English-derived aliases (exact match)
    pub fn lookup_by_alias(&self, key: &str) -> Option<&BookRecord> {
        self.resolve(self.indices.aliases.get(key))
    }

    /// Look up a record by its reference number
    pub fn lookup_by_reference_number(&self, reference_number: u16) -> Option<&BookRecord> {
        let index = self.indices.reference_numbers.as_ref()?;
        self.resolve(index.get(&reference_number))
    }

    /// Resolve free-form English book name text
    ///
    /// The text is upper-cased and looked up among the aliases. On a miss, a
    /// leading ordinal ("1.", "I ", "II.", ... up to 6) is rewritten to its
    /// digit and the lookup is retried once, so "I Cor" and "1.Cor" both
    /// resolve like "1COR".
    pub fn resolve_english_name(&self, text: &str) -> Option<&BookRecord> {
        let index = self.indices.english_names.as_ref()?;
        let upper = text.to_uppercase();
        if let Some(position) = index.get(upper.as_str()) {
            return self.resolve(Some(position));
        }

        let captures = ORDINAL_PREFIX.captures(&upper)?;
        let digit = match (captures.get(1), captures.get(2)) {
            (Some(arabic), _) => arabic.as_str(),
            (None, Some(roman)) => roman_to_digit(roman.as_str())?,
            (None, None) => return None,
        };
        let rest = &upper[captures.get(0)?.end()..];
        self.resolve(index.get(format!("{}{}", digit, rest).as_str()))
    }

    /// Resolve free-form book text to a record
    ///
    /// The text is upper-cased and tried as a reference code, then against the
    /// abbreviations of every scheme and alternative list. Failing both, the
    /// text resolves only if exactly one reference code occurs inside it.
    pub fn resolve_text(&self, text: &str) -> Option<&BookRecord> {
        let upper = text.to_uppercase();
        if let Some(record) = self.lookup_by_reference_code(&upper) {
            return Some(record);
        }
        if let Some(position) = self.indices.all_abbreviations.get(upper.as_str()) {
            return self.resolve(Some(position));
        }

        let mut contained = self
            .indices
            .reference_codes
            .iter()
            .filter(|(code, _)| upper.contains(code.as_str()));
        match (contained.next(), contained.next()) {
            (Some((_, position)), None) => self.resolve(Some(position)),
            _ => None,
        }
    }

    /// Check whether the reference code is known
    pub fn is_valid_reference_code(&self, reference_code: &str) -> bool {
        self.indices.reference_codes.contains_key(reference_code)
    }

    /// Look up a record by reference code, failing if it is unknown
    pub fn require_reference_code(&self, key: &str) -> Result<&BookRecord> {
        self.lookup_by_reference_code(key)
            .ok_or_else(|| Error::record_not_found(index_names::REFERENCE_CODE, key))
    }

    /// Convert a reference code to a scheme's abbreviation
    ///
    /// # Returns
    /// * `Ok(Some(abbreviation))` if the book has one for that scheme
    /// * `Ok(None)` if the book is known but the scheme has no abbreviation for it
    ///
    /// # Errors
    /// * `Error::RecordNotFound` if the reference code is unknown
    pub fn reference_code_to_scheme(
        &self,
        reference_code: &str,
        scheme: Scheme,
    ) -> Result<Option<&str>> {
        Ok(self
            .require_reference_code(reference_code)?
            .abbreviation(scheme))
    }

    /// Convert a scheme abbreviation to a reference code (case-insensitive)
    pub fn scheme_to_reference_code(&self, scheme: Scheme, key: &str) -> Result<&str> {
        self.lookup_by_scheme_abbreviation(scheme, key, false)
            .map(|record| record.reference_code.as_str())
            .ok_or_else(|| Error::record_not_found(scheme.name(), key))
    }

    /// Convert an OSIS abbreviation to a reference code (case-insensitive)
    ///
    /// Unless `strict` is set, a key unknown to OSIS is retried as a Sword
    /// abbreviation.
    ///
    /// # Errors
    /// * `Error::RecordNotFound` naming OSIS if neither scheme knows the key
    pub fn reference_code_from_osis(&self, key: &str, strict: bool) -> Result<&str> {
        let mut record = self.lookup_by_scheme_abbreviation(Scheme::Osis, key, false);
        if record.is_none() && !strict {
            record = self.lookup_by_scheme_abbreviation(Scheme::Sword, key, false);
        }
        record
            .map(|record| record.reference_code.as_str())
            .ok_or_else(|| Error::record_not_found(Scheme::Osis.name(), key))
    }

    /// All reference codes in sequence order
    pub fn reference_codes(&self) -> Vec<&str> {
        self.store
            .records()
            .iter()
            .map(|record| record.reference_code.as_str())
            .collect()
    }

    /// Reorder the given reference codes into sequence order
    ///
    /// Repeated codes are returned once.
    ///
    /// # Errors
    /// * `Error::RecordNotFound` for the first unknown code
    pub fn sequence_sort<S: AsRef<str>>(&self, codes: &[S]) -> Result<Vec<&str>> {
        let mut positions = codes
            .iter()
            .map(|code| {
                let code = code.as_ref();
                self.indices
                    .reference_codes
                    .get(code)
                    .ok_or_else(|| Error::record_not_found(index_names::REFERENCE_CODE, code))
            })
            .collect::<Result<Vec<usize>>>()?;

        positions.sort_unstable();
        positions.dedup();

        Ok(positions
            .into_iter()
            .filter_map(|position| self.store.get(position))
            .map(|record| record.reference_code.as_str())
            .collect())
    }

    /// Records whose typical section matches (case-insensitive)
    pub fn records_in_section(&self, section: &str) -> Vec<&BookRecord> {
        self.store
            .records()
            .iter()
            .filter(|record| {
                record
                    .typical_section
                    .as_deref()
                    .is_some_and(|s| s.eq_ignore_ascii_case(section))
            })
            .collect()
    }

    /// Distinct typical sections in order of first appearance
    pub fn sections(&self) -> Vec<&str> {
        let mut sections: Vec<&str> = Vec::new();
        for section in self
            .store
            .records()
            .iter()
            .filter_map(|record| record.typical_section.as_deref())
        {
            if !sections.contains(&section) {
                sections.push(section);
            }
        }
        sections
    }

    /// Records known to have exactly one chapter
    pub fn single_chapter_records(&self) -> Vec<&BookRecord> {
        self.store
            .records()
            .iter()
            .filter(|record| record.is_single_chapter())
            .collect()
    }

    fn resolve(&self, position: Option<usize>) -> Option<&BookRecord> {
        position.and_then(|position| self.store.get(position))
    }
}

fn roman_to_digit(roman: &str) -> Option<&'static str> {
    match roman {
        "I" => Some("1"),
        "II" => Some("2"),
        "III" => Some("3"),
        "IV" => Some("4"),
        "V" => Some("5"),
        "VI" => Some("6"),
        _ => None,
    }
}
