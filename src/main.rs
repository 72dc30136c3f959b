use anyhow::Context;
use books_codes::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        commands::run(args)
            .await
            .context("books-codes command failed")
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Table errors mean the source data is broken, not the invocation
            let exit_code = match error.downcast_ref::<books_codes::Error>() {
                Some(e) if e.is_table_error() => 2,
                _ => 1,
            };
            eprintln!("Error: {:#}", error);
            process::exit(exit_code);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Books Codes - Bible book identifier registry");
    println!("============================================");
    println!();
    println!("Compile the BibleBooksCodes TSV table and resolve book identifiers");
    println!("across reference codes, scheme abbreviations and English names.");
    println!();
    println!("USAGE:");
    println!("    books-codes <COMMAND> <TSV> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    summary     Compile the table and print index statistics");
    println!("    lookup      Resolve one key to a book record");
    println!("    list        List reference codes in sequence order");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -v, --verbose    Increase logging verbosity (repeatable)");
    println!("    -q, --quiet      Only log errors");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    books-codes summary BibleBooksCodes_Tables.tsv");
    println!("    books-codes lookup BibleBooksCodes_Tables.tsv CO1");
    println!("    books-codes lookup BibleBooksCodes_Tables.tsv 1co --by scheme --scheme usfm");
    println!("    books-codes lookup BibleBooksCodes_Tables.tsv \"I Cor\" --by english --format json");
    println!("    books-codes lookup BibleBooksCodes_Tables.tsv Revelation --by text");
    println!("    books-codes list BibleBooksCodes_Tables.tsv --section NT --scheme osis");
    println!();
    println!("For detailed help on any command, use:");
    println!("    books-codes <COMMAND> --help");
}
