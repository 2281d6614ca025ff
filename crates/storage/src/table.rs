//! Record table with a case-folded unique secondary index
//!
//! Both stores keep their records in a `BTreeMap` keyed by identity plus
//! an `FxHashMap` from the folded unique field (email, course code) to the
//! owning identity. The two maps are only ever mutated together, under the
//! owning store's write lock.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Records by identity, plus folded unique key → identity
#[derive(Debug)]
pub(crate) struct UniqueTable<Id, R> {
    records: BTreeMap<Id, R>,
    unique: FxHashMap<String, Id>,
}

impl<Id: Ord + Copy, R> UniqueTable<Id, R> {
    pub(crate) fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            unique: FxHashMap::default(),
        }
    }

    pub(crate) fn get(&self, id: &Id) -> Option<&R> {
        self.records.get(id)
    }

    pub(crate) fn contains(&self, id: &Id) -> bool {
        self.records.contains_key(id)
    }

    /// Identity owning this folded key, if any
    pub(crate) fn owner_of(&self, folded: &str) -> Option<Id> {
        self.unique.get(folded).copied()
    }

    /// Insert a record under a folded key the caller has checked is free
    pub(crate) fn insert(&mut self, folded: String, id: Id, record: R) {
        debug_assert!(!self.unique.contains_key(&folded));
        self.unique.insert(folded, id);
        self.records.insert(id, record);
    }

    /// Records in ascending identity order, which is also insertion order
    pub(crate) fn values(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}
