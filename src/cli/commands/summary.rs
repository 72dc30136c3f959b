//! Summary command implementation
//!
//! Compiles the table and reports record and index statistics.

use super::shared::{load_registry, to_json};
use crate::Result;
use crate::cli::args::{OutputFormat, SummaryArgs};
use colored::*;
use tracing::info;

/// Summary command runner
pub async fn run_summary(args: SummaryArgs) -> Result<()> {
    info!("Compiling {}", args.tsv.display());
    let (registry, summary) = load_registry(&args.tsv).await?;

    match args.output_format {
        OutputFormat::Json => println!("{}", to_json(&summary)?),
        OutputFormat::Human => {
            println!("{}", "Compile Summary".bright_green().bold());
            println!("{}", summary);
            println!(
                "Sections: {}",
                registry.sections().join(", ").bright_white()
            );
            if summary.total_skipped() > 0 {
                println!(
                    "{} duplicate keys were resolved first-wins (run with -vv to see them)",
                    summary.total_skipped().to_string().yellow()
                );
            }
        }
    }

    Ok(())
}
