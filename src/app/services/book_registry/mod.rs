//! Book registry service for O(1) book code lookups
//!
//! This module provides the frozen result of compiling the books codes table:
//! the ordered record store plus every exact-match index over it. The registry
//! is never mutated after compilation, so it can be shared (e.g. behind an
//! `Arc`) by any number of concurrent readers without locking.

pub mod index;
pub mod loader;
pub mod query;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use index::{ExactIndex, IndexBuilder, RegistryIndices, SchemeIndex};
pub use store::{RecordStore, StoreBuilder};

/// Book registry providing O(1) lookups by any supported identifier
///
/// The registry owns the records in sequence order and the indices built over
/// them. Lookups resolve a key to a position and then to the stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRegistry {
    /// Records in sequence order
    pub(crate) store: RecordStore,

    /// Exact-match indices over the store
    pub(crate) indices: RegistryIndices,
}

impl BookRegistry {
    /// Assemble a registry from a frozen store and its indices
    pub fn from_parts(store: RecordStore, indices: RegistryIndices) -> Self {
        Self { store, indices }
    }

    /// Read-only access to the record store
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Read-only access to the indices
    pub fn indices(&self) -> &RegistryIndices {
        &self.indices
    }
}
