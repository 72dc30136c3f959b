//! Test utilities for book registry testing
//!
//! Registries are compiled from the shared table fixtures so that every test
//! exercises the real compilation pass.

use crate::app::services::book_registry::BookRegistry;
use crate::app::services::table_compiler::TableCompiler;
use crate::app::services::table_compiler::tests::{genesis_exodus_table, sample_table};

mod query_tests;

/// Registry compiled from the two-row GEN/EXO table
pub fn genesis_exodus_registry() -> BookRegistry {
    TableCompiler::default()
        .compile(&genesis_exodus_table())
        .unwrap()
        .0
}

/// Registry compiled from the eight-row sample table
pub fn sample_registry() -> BookRegistry {
    TableCompiler::default().compile(&sample_table()).unwrap().0
}
