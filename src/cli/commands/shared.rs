//! Shared components for CLI commands
//!
//! This module contains logging setup, table loading and record rendering
//! used across the command implementations.

use crate::app::models::{BookRecord, Scheme};
use crate::app::services::book_registry::BookRegistry;
use crate::app::services::table_compiler::CompileSummary;
use crate::cli::args::Args;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};
use colored::*;
use std::path::Path;
use tracing::{debug, info};

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load and compile the table, checking the path first for a clearer error
pub async fn load_registry(path: &Path) -> Result<(BookRegistry, CompileSummary)> {
    if !path.is_file() {
        return Err(Error::configuration(format!(
            "Table file does not exist: {}",
            path.display()
        )));
    }

    let (registry, summary) = BookRegistry::load_from_path(path).await?;
    info!("{}", summary.summary());
    Ok((registry, summary))
}

/// Serialize a value for `--format json` output
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::configuration(format!("Failed to serialize output: {}", e)))
}

/// Render one record for human-readable output
pub fn render_record(record: &BookRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}\n",
        record.reference_code.bright_green().bold(),
        record.english_guide_name.bright_white().bold()
    ));
    output.push_str(&format!(
        "  Original name:     {} ({})\n",
        record.original_language_name, record.original_language_code
    ));
    output.push_str(&format!(
        "  Reference number:  {}\n  Sequence number:   {}\n",
        record.reference_number, record.sequence_number
    ));
    if let Some(chapters) = record.expected_chapters {
        output.push_str(&format!("  Expected chapters: {}\n", chapters));
    }
    if let Some(section) = &record.typical_section {
        match &record.typical_subsection {
            Some(subsection) => {
                output.push_str(&format!("  Section:           {} / {}\n", section, subsection))
            }
            None => output.push_str(&format!("  Section:           {}\n", section)),
        }
    }
    if let Some(composite_of) = &record.composite_of {
        output.push_str(&format!("  Consists of:       {}\n", composite_of));
    }

    let abbreviations: Vec<String> = Scheme::ALL
        .iter()
        .filter_map(|&scheme| {
            record
                .abbreviation(scheme)
                .map(|abbreviation| format!("{}={}", scheme, abbreviation))
        })
        .collect();
    if !abbreviations.is_empty() {
        output.push_str(&format!("  Abbreviations:     {}\n", abbreviations.join(" ")));
    }
    if let Some(usfm) = &record.numbers.usfm_text {
        output.push_str(&format!("  USFM number:       {}\n", usfm));
    }
    if let Some(usx) = &record.numbers.usx_text {
        output.push_str(&format!("  USX number:        {}\n", usx));
    }
    if !record.alternate_record_codes.is_empty() {
        output.push_str(&format!(
            "  Alternate codes:   {}\n",
            record.alternate_record_codes.join(", ")
        ));
    }
    output.push_str(&format!(
        "  Aliases:           {}",
        record.english_derived_aliases.join(", ")
    ));

    output
}
