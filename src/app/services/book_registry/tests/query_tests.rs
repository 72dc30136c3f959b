//! Tests for book lookup functionality

use super::{genesis_exodus_registry, sample_registry};
use crate::Error;
use crate::app::models::Scheme;
use crate::app::services::book_registry::BookRegistry;
use std::sync::Arc;
use std::thread;

#[test]
fn test_lookup_two_row_table() {
    let registry = genesis_exodus_registry();

    let exodus = registry.lookup_by_reference_code("EXO").unwrap();
    assert_eq!(exodus.english_guide_name, "Exodus");
    assert_eq!(
        registry.lookup_by_alias("2Mo").unwrap().reference_code,
        "EXO"
    );

    let genesis = registry
        .lookup_by_scheme_abbreviation(Scheme::Usfm, "gen", false)
        .unwrap();
    assert_eq!(genesis.reference_code, "GEN");
    assert_eq!(genesis, registry.get(0).unwrap());

    assert!(registry.lookup_by_reference_code("XXX").is_none());
}

#[test]
fn test_reference_code_lookup_is_case_sensitive() {
    let registry = genesis_exodus_registry();
    assert!(registry.lookup_by_reference_code("gen").is_none());
    assert!(registry.lookup_by_alias("genesis").is_none());
}

#[test]
fn test_case_sensitive_scheme_lookup() {
    let registry = genesis_exodus_registry();

    assert!(registry
        .lookup_by_scheme_abbreviation(Scheme::Usfm, "gen", true)
        .is_none());
    assert!(registry
        .lookup_by_scheme_abbreviation(Scheme::Usfm, "Gen", true)
        .is_some());
    assert!(registry
        .lookup_by_scheme_abbreviation(Scheme::Osis, "EXOD", false)
        .is_some());
}

#[test]
fn test_scheme_without_entries_misses() {
    let registry = genesis_exodus_registry();
    assert!(registry
        .lookup_by_scheme_abbreviation(Scheme::Byzantine, "Gen", false)
        .is_none());
}

#[test]
fn test_every_record_round_trips_through_its_keys() {
    let registry = sample_registry();

    for record in registry.records() {
        let by_code = registry
            .lookup_by_reference_code(&record.reference_code)
            .unwrap();
        assert_eq!(by_code, record);

        let by_sequence = registry
            .get_by_sequence_number(record.sequence_number)
            .unwrap();
        assert_eq!(by_sequence, record);

        let by_number = registry
            .lookup_by_reference_number(record.reference_number)
            .unwrap();
        assert_eq!(by_number, record);
    }
}

#[test]
fn test_first_wins_is_deterministic_across_builds() {
    for _ in 0..3 {
        let registry = sample_registry();
        assert_eq!(
            registry
                .lookup_by_scheme_abbreviation(Scheme::Usfm, "1Sa", true)
                .unwrap()
                .reference_code,
            "SA1"
        );
        assert_eq!(registry.lookup_by_alias("Samuel").unwrap().reference_code, "SAM");
    }
}

#[test]
fn test_resolve_english_name() {
    let registry = sample_registry();

    assert_eq!(registry.resolve_english_name("genesis").unwrap().reference_code, "GEN");
    assert_eq!(registry.resolve_english_name("1 samuel").unwrap().reference_code, "SA1");
    assert_eq!(registry.resolve_english_name("I Cor").unwrap().reference_code, "CO1");
    assert_eq!(registry.resolve_english_name("1.Cor").unwrap().reference_code, "CO1");
    assert_eq!(registry.resolve_english_name("I.Corinthians").unwrap().reference_code, "CO1");
    assert!(registry.resolve_english_name("VII Cor").is_none());
    assert!(registry.resolve_english_name("Isaiah").is_none());
}

#[test]
fn test_resolve_text_tries_reference_code_then_abbreviations() {
    let registry = sample_registry();

    assert_eq!(registry.resolve_text("gen").unwrap().reference_code, "GEN");
    assert_eq!(registry.resolve_text("co1").unwrap().reference_code, "CO1");
    assert_eq!(registry.resolve_text("exod").unwrap().reference_code, "EXO");
    // Alternative abbreviation
    assert_eq!(registry.resolve_text("ICor").unwrap().reference_code, "CO1");
    // First wins: SAM also carries the USFM "1Sa"
    assert_eq!(registry.resolve_text("1sa").unwrap().reference_code, "SA1");
}

#[test]
fn test_resolve_text_falls_back_to_a_unique_contained_code() {
    let registry = sample_registry();

    assert_eq!(registry.resolve_text("Laodiceans").unwrap().reference_code, "LAO");
    assert_eq!(registry.resolve_text("Book of Genesis").unwrap().reference_code, "GEN");
    // GEN and EXO both occur
    assert!(registry.resolve_text("Genesis and Exodus").is_none());
    assert!(registry.resolve_text("Isaiah").is_none());
}

#[test]
fn test_osis_conversion_falls_back_to_sword() {
    let registry = sample_registry();

    assert_eq!(registry.reference_code_from_osis("jude", true).unwrap(), "JDE");
    assert_eq!(registry.reference_code_from_osis("EpLao", false).unwrap(), "LAO");
    assert_eq!(registry.reference_code_from_osis("laod", false).unwrap(), "LAO");

    let err = registry.reference_code_from_osis("Laod", true).unwrap_err();
    assert_eq!(err.to_string(), "OSIS key 'Laod' not found");
    assert!(registry.reference_code_from_osis("Zzz", false).is_err());
}

#[test]
fn test_uppercased_scheme_abbreviations_match_canonical_lookups() {
    let registry = sample_registry();

    for record in registry.records() {
        for scheme in Scheme::ALL {
            let Some(abbreviation) = record.abbreviation(scheme) else {
                continue;
            };
            let canonical = registry
                .lookup_by_scheme_abbreviation(scheme, abbreviation, true)
                .unwrap();
            let uppercased = registry
                .lookup_by_scheme_abbreviation(scheme, &abbreviation.to_uppercase(), false)
                .unwrap();
            assert_eq!(
                uppercased, canonical,
                "{} abbreviation '{}' of {}",
                scheme, abbreviation, record.reference_code
            );
        }
    }
}

#[test]
fn test_require_reference_code() {
    let registry = genesis_exodus_registry();
    assert!(registry.require_reference_code("GEN").is_ok());

    let err = registry.require_reference_code("XXX").unwrap_err();
    assert!(matches!(err, Error::RecordNotFound { .. }));
    assert_eq!(err.to_string(), "Reference key 'XXX' not found");
    assert!(!err.is_table_error());
}

#[test]
fn test_reference_code_scheme_conversions() {
    let registry = genesis_exodus_registry();

    assert_eq!(
        registry.reference_code_to_scheme("EXO", Scheme::Osis).unwrap(),
        Some("Exod")
    );
    assert_eq!(registry.reference_code_to_scheme("EXO", Scheme::Sbl).unwrap(), None);
    assert!(registry.reference_code_to_scheme("XXX", Scheme::Osis).is_err());

    assert_eq!(registry.scheme_to_reference_code(Scheme::Osis, "exod").unwrap(), "EXO");
    let err = registry.scheme_to_reference_code(Scheme::Osis, "Lev").unwrap_err();
    assert_eq!(err.to_string(), "OSIS key 'Lev' not found");
}

#[test]
fn test_is_valid_reference_code() {
    let registry = genesis_exodus_registry();
    assert!(registry.is_valid_reference_code("GEN"));
    assert!(!registry.is_valid_reference_code("LEV"));
}

#[test]
fn test_sequence_sort() {
    let registry = sample_registry();

    let sorted = registry.sequence_sort(&["JDE", "GEN", "EST", "GEN"]).unwrap();
    assert_eq!(sorted, vec!["GEN", "EST", "JDE"]);

    let codes = vec!["CO1".to_string(), "EXO".to_string()];
    assert_eq!(registry.sequence_sort(&codes).unwrap(), vec!["EXO", "CO1"]);

    assert!(matches!(
        registry.sequence_sort(&["GEN", "ZZZ"]),
        Err(Error::RecordNotFound { .. })
    ));
}

#[test]
fn test_sections_and_chapter_filters() {
    let registry = sample_registry();

    assert_eq!(registry.sections(), vec!["OT", "NT", "DC"]);
    let new_testament: Vec<&str> = registry
        .records_in_section("nt")
        .iter()
        .map(|record| record.reference_code.as_str())
        .collect();
    assert_eq!(new_testament, vec!["CO1", "JDE"]);

    let single: Vec<&str> = registry
        .single_chapter_records()
        .iter()
        .map(|record| record.reference_code.as_str())
        .collect();
    assert_eq!(single, vec!["JDE", "LAO"]);
}

#[test]
fn test_pair_chapter_counts_are_exposed() {
    let registry = sample_registry();
    let esther = registry.lookup_by_reference_code("EST").unwrap();

    assert_eq!(esther.max_chapters(), Some(16));
    assert_eq!(esther.alternate_record_codes, vec!["ESG", "ESC"]);
    assert!(registry.lookup_by_reference_code("SAM").unwrap().is_composite());
}

#[test]
fn test_registry_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BookRegistry>();
}

#[test]
fn test_concurrent_readers_see_identical_results() {
    let registry = Arc::new(sample_registry());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                (0..100)
                    .map(|_| {
                        registry
                            .lookup_by_scheme_abbreviation(Scheme::Usfm, "1sa", false)
                            .map(|record| record.sequence_number)
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let results = handle.join().unwrap();
        assert!(results.iter().all(|result| *result == Some(3)));
    }
}
