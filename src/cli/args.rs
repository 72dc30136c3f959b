//! Command-line argument definitions for the books codes tool
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::app::models::Scheme;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Bible books codes tool
///
/// Compiles the BibleBooksCodes TSV table and answers lookups against it.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "books-codes",
    version,
    about = "Compile the BibleBooksCodes table and look up Bible book codes",
    long_about = "Compiles the BibleBooksCodes TSV table into an in-memory registry and \
                  resolves book identifiers across reference codes, scheme abbreviations \
                  (USFM, OSIS, SBL, ...), reference numbers and English-derived names."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Compile the table and print the compile summary
    Summary(SummaryArgs),
    /// Resolve one key to a book record
    Lookup(LookupArgs),
    /// List reference codes in sequence order
    List(ListArgs),
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    /// Path to the BibleBooksCodes TSV table
    #[arg(value_name = "TSV")]
    pub tsv: PathBuf,

    /// Output format for the summary
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Arguments for the lookup command
#[derive(Debug, Clone, Parser)]
pub struct LookupArgs {
    /// Path to the BibleBooksCodes TSV table
    #[arg(value_name = "TSV")]
    pub tsv: PathBuf,

    /// Key to resolve
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Which index to resolve the key through
    #[arg(long = "by", value_enum, default_value = "reference")]
    pub by: LookupKind,

    /// Abbreviation scheme, required with `--by scheme`
    ///
    /// One of: Short, SBL, OSIS, Sword, USFM, Unbound, Logos, NETBible,
    /// DrupalBible, BibleWorks, Byzantine (case and separators are ignored).
    #[arg(long = "scheme", value_name = "SCHEME")]
    pub scheme: Option<Scheme>,

    /// Only accept the scheme abbreviation in its canonical case
    #[arg(long = "case-sensitive")]
    pub case_sensitive: bool,

    /// Output format for the record
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Arguments for the list command
#[derive(Debug, Clone, Parser)]
pub struct ListArgs {
    /// Path to the BibleBooksCodes TSV table
    #[arg(value_name = "TSV")]
    pub tsv: PathBuf,

    /// Only list books of this typical section (e.g. OT, NT, DC)
    #[arg(long = "section", value_name = "SECTION")]
    pub section: Option<String>,

    /// Only list books with a single chapter
    #[arg(long = "single-chapter")]
    pub single_chapter: bool,

    /// Also print each book's abbreviation in this scheme
    #[arg(long = "scheme", value_name = "SCHEME")]
    pub scheme: Option<Scheme>,

    /// Output format for the listing
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Index a lookup key is resolved through
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LookupKind {
    /// Reference code (e.g. GEN, CO1)
    Reference,
    /// English-derived alias, exact match
    Alias,
    /// Free-form English name, case-insensitive with ordinal rewriting
    English,
    /// Reference number
    Number,
    /// Abbreviation in the scheme given by --scheme
    Scheme,
    /// OSIS abbreviation, falling back to Sword unless --case-sensitive
    Osis,
    /// Free-form text: reference code, any abbreviation, then a contained code
    Text,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl LookupArgs {
    /// Validate the lookup arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(Error::configuration("Lookup key cannot be empty"));
        }

        match (self.by, self.scheme) {
            (LookupKind::Scheme, None) => Err(Error::configuration(
                "--scheme is required when looking up --by scheme",
            )),
            (LookupKind::Scheme, Some(_)) => Ok(()),
            (_, Some(scheme)) => Err(Error::configuration(format!(
                "--scheme {} is only meaningful with --by scheme",
                scheme
            ))),
            (LookupKind::Number, None) => self.reference_number().map(|_| ()),
            _ => Ok(()),
        }
    }

    /// The key parsed as a reference number
    pub fn reference_number(&self) -> Result<u16> {
        self.key.trim().parse().map_err(|e| {
            Error::configuration(format!(
                "Reference number '{}' is not a valid number: {}",
                self.key, e
            ))
        })
    }
}
