//! Exact-match indices over the record store
//!
//! Every index maps a key to a record position. Indices are built in one pass
//! over the store in sequence order, and every secondary index resolves
//! duplicate keys first-wins: the record with the smaller sequence number keeps
//! the key and later records are skipped for that index. Only the primary
//! reference code index is a strict bijection, which the store guarantees.

use super::store::RecordStore;
use crate::app::models::Scheme;
use crate::config::CompilerConfig;
use crate::constants::index_names;
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::hash::Hash;
use tracing::{debug, info, warn};

/// Insertion-ordered exact-match index from key to record position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactIndex<K: Hash + Eq = String> {
    entries: IndexMap<K, usize>,
}

impl<K: Hash + Eq> Default for ExactIndex<K> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq> ExactIndex<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the key unless it is already present; returns true if inserted
    pub fn insert_first_wins(&mut self, key: K, position: usize) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(position);
                true
            }
        }
    }

    /// Position stored for the key
    pub fn get<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).copied()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(key, &position)| (key, position))
    }
}

/// Canonical-case index for one scheme plus its optional upper-cased variant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemeIndex {
    pub canonical: ExactIndex,
    pub uppercase: Option<ExactIndex>,
}

impl SchemeIndex {
    /// Resolve a key, trying the canonical index before the upper-cased variant
    pub fn resolve(&self, key: &str, case_sensitive: bool) -> Option<usize> {
        if let Some(position) = self.canonical.get(key) {
            return Some(position);
        }
        if case_sensitive {
            return None;
        }
        self.uppercase
            .as_ref()
            .and_then(|index| index.get(key.to_uppercase().as_str()))
    }
}

/// All indices of a compiled registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryIndices {
    /// Reference code to position (unique keys)
    pub reference_codes: ExactIndex,

    /// Reference number to position
    pub reference_numbers: Option<ExactIndex<u16>>,

    /// One index per abbreviation scheme
    pub schemes: BTreeMap<Scheme, SchemeIndex>,

    /// English-derived alias to position
    pub aliases: ExactIndex,

    /// Upper-cased English-derived alias to position
    pub english_names: Option<ExactIndex>,

    /// Upper-cased abbreviation from any scheme or alternative list to position
    pub all_abbreviations: ExactIndex,
}

impl RegistryIndices {
    /// Entry count per index name, for summaries
    pub fn entry_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        counts.insert(
            index_names::REFERENCE_CODE.to_string(),
            self.reference_codes.len(),
        );
        if let Some(index) = &self.reference_numbers {
            counts.insert(index_names::REFERENCE_NUMBER.to_string(), index.len());
        }
        for (scheme, index) in &self.schemes {
            counts.insert(scheme.name().to_string(), index.canonical.len());
            if let Some(uppercase) = &index.uppercase {
                counts.insert(uppercase_index_name(*scheme), uppercase.len());
            }
        }
        counts.insert(index_names::ALIAS.to_string(), self.aliases.len());
        if let Some(index) = &self.english_names {
            counts.insert(index_names::ENGLISH_NAME.to_string(), index.len());
        }
        counts.insert(
            index_names::ALL_ABBREVIATIONS.to_string(),
            self.all_abbreviations.len(),
        );
        counts
    }
}

/// Name of a scheme's upper-cased index variant
pub fn uppercase_index_name(scheme: Scheme) -> String {
    format!("{} (uppercase)", scheme.name())
}

/// Builds [`RegistryIndices`] from a frozen store in one pass
#[derive(Debug)]
pub struct IndexBuilder<'a> {
    config: &'a CompilerConfig,
    indices: RegistryIndices,
    skipped_duplicates: BTreeMap<String, usize>,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(config: &'a CompilerConfig) -> Self {
        let schemes = Scheme::ALL
            .iter()
            .map(|&scheme| {
                let uppercase = config
                    .is_case_insensitive(scheme)
                    .then(ExactIndex::new);
                (
                    scheme,
                    SchemeIndex {
                        canonical: ExactIndex::new(),
                        uppercase,
                    },
                )
            })
            .collect();

        Self {
            config,
            indices: RegistryIndices {
                reference_codes: ExactIndex::new(),
                reference_numbers: config.index_reference_numbers.then(ExactIndex::new),
                schemes,
                aliases: ExactIndex::new(),
                english_names: config.index_english_names.then(ExactIndex::new),
                all_abbreviations: ExactIndex::new(),
            },
            skipped_duplicates: BTreeMap::new(),
        }
    }

    /// Build every index over the store
    ///
    /// Returns the indices and, per index name, how many duplicate keys were
    /// skipped by the first-wins policy. This cannot fail.
    pub fn build(mut self, store: &RecordStore) -> (RegistryIndices, BTreeMap<String, usize>) {
        info!(
            "Building indices over {} records ({} case-insensitive schemes)",
            store.len(),
            self.config.case_insensitive_schemes.len()
        );

        for (position, record) in store.iter() {
            let reference_code = record.reference_code.clone();
            if !self
                .indices
                .reference_codes
                .insert_first_wins(reference_code, position)
            {
                // The store rejects duplicate reference codes
                warn!("Reference code '{}' indexed twice", record.reference_code);
            }

            if let Some(index) = self.indices.reference_numbers.as_mut() {
                if !index.insert_first_wins(record.reference_number, position) {
                    Self::note_skip(
                        &mut self.skipped_duplicates,
                        index_names::REFERENCE_NUMBER,
                        &record.reference_number.to_string(),
                        position,
                    );
                }
            }

            for (scheme, index) in self.indices.schemes.iter_mut() {
                let Some(abbreviation) = record.abbreviation(*scheme) else {
                    continue;
                };
                if !index
                    .canonical
                    .insert_first_wins(abbreviation.to_string(), position)
                {
                    Self::note_skip(
                        &mut self.skipped_duplicates,
                        scheme.name(),
                        abbreviation,
                        position,
                    );
                }
                if let Some(uppercase) = index.uppercase.as_mut() {
                    let key = abbreviation.to_uppercase();
                    if !uppercase.insert_first_wins(key.clone(), position) {
                        Self::note_skip(
                            &mut self.skipped_duplicates,
                            &uppercase_index_name(*scheme),
                            &key,
                            position,
                        );
                    }
                }
            }

            let mut reachable_by_alias = false;
            for alias in &record.english_derived_aliases {
                if self.indices.aliases.insert_first_wins(alias.clone(), position) {
                    reachable_by_alias = true;
                } else if self.indices.aliases.get(alias.as_str()) == Some(position) {
                    // Repeated alias within the same record
                    reachable_by_alias = true;
                } else {
                    Self::note_skip(
                        &mut self.skipped_duplicates,
                        index_names::ALIAS,
                        alias,
                        position,
                    );
                }

                if let Some(index) = self.indices.english_names.as_mut() {
                    let key = alias.to_uppercase();
                    if !index.insert_first_wins(key.clone(), position)
                        && index.get(key.as_str()) != Some(position)
                    {
                        Self::note_skip(
                            &mut self.skipped_duplicates,
                            index_names::ENGLISH_NAME,
                            &key,
                            position,
                        );
                    }
                }
            }
            if !reachable_by_alias {
                warn!(
                    "Record {} is unreachable by alias: every alias belongs to an earlier record",
                    record.reference_code
                );
            }

            let abbreviations = Scheme::ALL
                .iter()
                .filter_map(|&scheme| record.abbreviation(scheme))
                .chain(record.alternate_abbreviations.iter().map(String::as_str));
            for abbreviation in abbreviations {
                let key = abbreviation.to_uppercase();
                let index = &mut self.indices.all_abbreviations;
                if !index.insert_first_wins(key.clone(), position)
                    && index.get(key.as_str()) != Some(position)
                {
                    Self::note_skip(
                        &mut self.skipped_duplicates,
                        index_names::ALL_ABBREVIATIONS,
                        &key,
                        position,
                    );
                }
            }
        }

        for (name, count) in self.indices.entry_counts() {
            debug!("Index {}: {} entries", name, count);
        }

        (self.indices, self.skipped_duplicates)
    }

    fn note_skip(
        skipped: &mut BTreeMap<String, usize>,
        index_name: &str,
        key: &str,
        position: usize,
    ) {
        debug!(
            "{} index: key '{}' of record {} skipped, already taken by an earlier record",
            index_name, key, position
        );
        *skipped.entry(index_name.to_string()).or_insert(0) += 1;
    }
}
