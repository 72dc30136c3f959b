//! Data models for the books codes registry
//!
//! This module contains the canonical book record compiled from one row of the
//! BibleBooksCodes table, the chapter count variant and the identifier schemes
//! that contribute abbreviations to each record.

use crate::constants::columns;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Identifier Schemes
// =============================================================================

/// External cataloguing schemes that carry a textual book abbreviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scheme {
    Short,
    Sbl,
    Osis,
    Sword,
    Usfm,
    Unbound,
    Logos,
    NetBible,
    DrupalBible,
    BibleWorks,
    Byzantine,
}

impl Scheme {
    /// Every scheme, in source column order
    pub const ALL: [Scheme; 11] = [
        Scheme::Short,
        Scheme::Sbl,
        Scheme::Osis,
        Scheme::Sword,
        Scheme::Usfm,
        Scheme::Unbound,
        Scheme::Logos,
        Scheme::NetBible,
        Scheme::DrupalBible,
        Scheme::BibleWorks,
        Scheme::Byzantine,
    ];

    /// Source column holding this scheme's abbreviation
    pub fn column(&self) -> &'static str {
        match self {
            Scheme::Short => columns::SHORT_ABBREVIATION,
            Scheme::Sbl => columns::SBL_ABBREVIATION,
            Scheme::Osis => columns::OSIS_ABBREVIATION,
            Scheme::Sword => columns::SWORD_ABBREVIATION,
            Scheme::Usfm => columns::USFM_ABBREVIATION,
            Scheme::Unbound => columns::UNBOUND_CODE,
            Scheme::Logos => columns::LOGOS_ABBREVIATION,
            Scheme::NetBible => columns::NET_BIBLE_ABBREVIATION,
            Scheme::DrupalBible => columns::DRUPAL_BIBLE_ABBREVIATION,
            Scheme::BibleWorks => columns::BIBLE_WORKS_ABBREVIATION,
            Scheme::Byzantine => columns::BYZANTINE_ABBREVIATION,
        }
    }

    /// Short display name (e.g. "USFM")
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Short => "Short",
            Scheme::Sbl => "SBL",
            Scheme::Osis => "OSIS",
            Scheme::Sword => "Sword",
            Scheme::Usfm => "USFM",
            Scheme::Unbound => "Unbound",
            Scheme::Logos => "Logos",
            Scheme::NetBible => "NETBible",
            Scheme::DrupalBible => "DrupalBible",
            Scheme::BibleWorks => "BibleWorks",
            Scheme::Byzantine => "Byzantine",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        Scheme::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.name().to_lowercase() == wanted)
            .ok_or_else(|| {
                Error::configuration(format!(
                    "Unknown scheme '{}'. Valid schemes: {}",
                    s,
                    Scheme::ALL.map(|scheme| scheme.name()).join(", ")
                ))
            })
    }
}

// =============================================================================
// Chapter Counts
// =============================================================================

/// Expected number of chapters for a book
///
/// Some books legitimately have two plausible counts (e.g. combined or
/// variant editions), so a pair is representable. Absence is expressed with
/// `Option<ChapterCount>` on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChapterCount {
    Single(u16),
    Pair([u16; 2]),
}

impl ChapterCount {
    /// Largest of the plausible chapter counts
    pub fn max_chapters(&self) -> u16 {
        match *self {
            ChapterCount::Single(count) => count,
            ChapterCount::Pair([first, second]) => first.max(second),
        }
    }

    /// True when the book only ever has a single chapter
    pub fn is_single_chapter(&self) -> bool {
        match *self {
            ChapterCount::Single(count) => count == 1,
            ChapterCount::Pair(pair) => pair.iter().all(|&count| count == 1),
        }
    }
}

impl fmt::Display for ChapterCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChapterCount::Single(count) => write!(f, "{}", count),
            ChapterCount::Pair([first, second]) => write!(f, "{},{}", first, second),
        }
    }
}

// =============================================================================
// Book Record
// =============================================================================

/// Scheme abbreviations carried by one book (each optional)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeAbbreviations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usfm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unbound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_bible: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drupal_bible: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bible_works: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byzantine: Option<String>,
}

impl SchemeAbbreviations {
    /// Abbreviation for the given scheme, if present
    pub fn get(&self, scheme: Scheme) -> Option<&str> {
        let value = match scheme {
            Scheme::Short => &self.short,
            Scheme::Sbl => &self.sbl,
            Scheme::Osis => &self.osis,
            Scheme::Sword => &self.sword,
            Scheme::Usfm => &self.usfm,
            Scheme::Unbound => &self.unbound,
            Scheme::Logos => &self.logos,
            Scheme::NetBible => &self.net_bible,
            Scheme::DrupalBible => &self.drupal_bible,
            Scheme::BibleWorks => &self.bible_works,
            Scheme::Byzantine => &self.byzantine,
        };
        value.as_deref()
    }

    /// Mutable slot for the given scheme
    pub(crate) fn slot_mut(&mut self, scheme: Scheme) -> &mut Option<String> {
        match scheme {
            Scheme::Short => &mut self.short,
            Scheme::Sbl => &mut self.sbl,
            Scheme::Osis => &mut self.osis,
            Scheme::Sword => &mut self.sword,
            Scheme::Usfm => &mut self.usfm,
            Scheme::Unbound => &mut self.unbound,
            Scheme::Logos => &mut self.logos,
            Scheme::NetBible => &mut self.net_bible,
            Scheme::DrupalBible => &mut self.drupal_bible,
            Scheme::BibleWorks => &mut self.bible_works,
            Scheme::Byzantine => &mut self.byzantine,
        }
    }
}

/// Numeric catalogue codes carried by one book
///
/// USFM book numbers are not guaranteed to be numeric ("A7", "B2", ...), so
/// the raw text is always retained and the typed value is only present when
/// the text parses. USX numbers are always numeric but keep their source
/// text too, since the zero padding ("001") is significant to USX files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeNumbers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ccel: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usfm_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usfm: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usx_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usx: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bibledit: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logos: Option<u16>,
}

/// Canonical book record compiled from one row of the source table
///
/// Records are immutable once the registry is built. Every optional attribute
/// is an explicit `Option`; an empty source cell never survives as `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Original language code (e.g. "Heb", "Grk")
    pub original_language_code: String,

    /// Book name in the original language
    pub original_language_name: String,

    /// English guide name (e.g. "Genesis")
    pub english_guide_name: String,

    /// Three-character reference code - primary key (e.g. "GEN", "CO1")
    pub reference_code: String,

    /// Reference number (1..66 for GEN..REV, then arbitrary)
    pub reference_number: u16,

    /// Sequence number, dense and increasing in source order
    pub sequence_number: u16,

    /// Expected chapter count(s)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_chapters: Option<ChapterCount>,

    /// Abbreviations from the external schemes
    pub abbreviations: SchemeAbbreviations,

    /// Numeric codes from the external catalogues
    pub numbers: SchemeNumbers,

    /// Other abbreviations that may refer to this book
    pub alternate_abbreviations: Vec<String>,

    /// Other reference codes that may stand for this book
    pub alternate_record_codes: Vec<String>,

    /// Codes of the books this collection stands in for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite_of: Option<String>,

    /// Typical section (e.g. "OT", "NT", "DC")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typical_section: Option<String>,

    /// Typical subsection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typical_subsection: Option<String>,

    /// English-derived names usable as lookup keys (never empty)
    pub english_derived_aliases: Vec<String>,
}

impl BookRecord {
    /// Abbreviation for the given scheme, if present
    pub fn abbreviation(&self, scheme: Scheme) -> Option<&str> {
        self.abbreviations.get(scheme)
    }

    /// Maximum expected chapter count, if known
    pub fn max_chapters(&self) -> Option<u16> {
        self.expected_chapters.map(|count| count.max_chapters())
    }

    /// True if the book is known to have a single chapter
    pub fn is_single_chapter(&self) -> bool {
        self.expected_chapters
            .is_some_and(|count| count.is_single_chapter())
    }

    /// True if this record stands in for a collection of other books
    pub fn is_composite(&self) -> bool {
        self.composite_of.is_some()
    }
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} #{} ({})",
            self.reference_code, self.sequence_number, self.english_guide_name
        )
    }
}
