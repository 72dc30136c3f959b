//! List command implementation
//!
//! Lists book reference codes in sequence order, optionally filtered.

use super::shared::{load_registry, to_json};
use crate::Result;
use crate::app::models::BookRecord;
use crate::cli::args::{ListArgs, OutputFormat};
use colored::*;
use serde_json::json;
use tracing::info;

/// List command runner
pub async fn run_list(args: ListArgs) -> Result<()> {
    let (registry, _) = load_registry(&args.tsv).await?;

    let records: Vec<&BookRecord> = match &args.section {
        Some(section) => registry.records_in_section(section),
        None => registry.records().iter().collect(),
    };
    let records: Vec<&BookRecord> = records
        .into_iter()
        .filter(|record| !args.single_chapter || record.is_single_chapter())
        .collect();
    info!("Listing {} of {} records", records.len(), registry.record_count());

    match args.output_format {
        OutputFormat::Json => {
            let rows: Vec<_> = records
                .iter()
                .map(|record| {
                    json!({
                        "sequence_number": record.sequence_number,
                        "reference_code": record.reference_code,
                        "english_guide_name": record.english_guide_name,
                        "abbreviation": args.scheme.and_then(|scheme| record.abbreviation(scheme)),
                    })
                })
                .collect();
            println!("{}", to_json(&rows)?);
        }
        OutputFormat::Human => {
            for record in &records {
                let abbreviation = args
                    .scheme
                    .map(|scheme| record.abbreviation(scheme).unwrap_or("-"))
                    .unwrap_or_default();
                println!(
                    "{:>4}  {}  {:<8} {}",
                    record.sequence_number,
                    record.reference_code.bright_green(),
                    abbreviation,
                    record.english_guide_name
                );
            }
            if records.is_empty() {
                println!("{}", "No books match the given filters.".yellow());
            }
        }
    }

    Ok(())
}
