//! Lookup command implementation
//!
//! Resolves one key through the selected index and prints the record.

use super::shared::{load_registry, render_record, to_json};
use crate::app::models::BookRecord;
use crate::app::services::book_registry::BookRegistry;
use crate::cli::args::{LookupArgs, LookupKind, OutputFormat};
use crate::constants::index_names;
use crate::{Error, Result};
use tracing::debug;

/// Lookup command runner
///
/// A key that resolves to nothing is reported as `Error::RecordNotFound`.
pub async fn run_lookup(args: LookupArgs) -> Result<()> {
    args.validate()?;
    let (registry, _) = load_registry(&args.tsv).await?;

    let record = resolve(&registry, &args)?;
    debug!("'{}' resolved to {}", args.key, record);

    match args.output_format {
        OutputFormat::Json => println!("{}", to_json(record)?),
        OutputFormat::Human => println!("{}", render_record(record)),
    }

    Ok(())
}

/// Resolve the key through the index selected by `--by`
pub fn resolve<'a>(registry: &'a BookRegistry, args: &LookupArgs) -> Result<&'a BookRecord> {
    let key = args.key.as_str();
    match args.by {
        LookupKind::Reference => registry.require_reference_code(key),
        LookupKind::Alias => registry
            .lookup_by_alias(key)
            .ok_or_else(|| Error::record_not_found(index_names::ALIAS, key)),
        LookupKind::English => registry
            .resolve_english_name(key)
            .ok_or_else(|| Error::record_not_found(index_names::ENGLISH_NAME, key)),
        LookupKind::Number => registry
            .lookup_by_reference_number(args.reference_number()?)
            .ok_or_else(|| Error::record_not_found(index_names::REFERENCE_NUMBER, key)),
        LookupKind::Scheme => {
            let scheme = args.scheme.ok_or_else(|| {
                Error::configuration("--scheme is required when looking up --by scheme")
            })?;
            registry
                .lookup_by_scheme_abbreviation(scheme, key, args.case_sensitive)
                .ok_or_else(|| Error::record_not_found(scheme.name(), key))
        }
        LookupKind::Osis => {
            let reference_code = registry.reference_code_from_osis(key, args.case_sensitive)?;
            registry.require_reference_code(reference_code)
        }
        LookupKind::Text => registry
            .resolve_text(key)
            .ok_or_else(|| Error::record_not_found(index_names::ALL_ABBREVIATIONS, key)),
    }
}
