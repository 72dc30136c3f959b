//! Command implementations for the books codes CLI
//!
//! This module contains the command execution logic for the CLI interface.
//! Each command is implemented in its own module.

pub mod list;
pub mod lookup;
pub mod shared;
pub mod summary;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// This function dispatches to the appropriate subcommand handler:
/// - `summary`: compile the table and report index statistics
/// - `lookup`: resolve a key through one index
/// - `list`: list reference codes in sequence order
pub async fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args)?;

    match args.command {
        Some(Commands::Summary(summary_args)) => summary::run_summary(summary_args).await,
        Some(Commands::Lookup(lookup_args)) => lookup::run_lookup(lookup_args).await,
        Some(Commands::List(list_args)) => list::run_list(list_args).await,
        None => Err(crate::Error::configuration("No command given")),
    }
}
