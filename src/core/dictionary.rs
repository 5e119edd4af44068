//! The merged translation dictionary.
//!
//! `DictionaryStore` is the only shared mutable state of the engine. Writes are
//! union-merges (later values win, nothing is ever removed implicitly) and
//! readers get an immutable [`Dictionary`] snapshot that stays valid while
//! other threads keep merging.

use std::{
    collections::BTreeMap,
    sync::{Arc, PoisonError, RwLock},
};

/// Partial key → raw value mapping produced by parsing one dictionary file.
pub type Entries = BTreeMap<String, String>;

/// Immutable view of the dictionary at one point in time.
///
/// Cheap to clone. Iteration is in ascending key order and can be restarted
/// any number of times.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Arc<Entries>,
}

impl Dictionary {
    pub fn new(entries: Entries) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Raw (undecoded) value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate `(key, raw value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Thread-safe, merge-only dictionary shared by the engine and its hosts.
///
/// Internally copy-on-write: a merge clones the map only while some reader
/// still holds an older snapshot.
#[derive(Debug, Default)]
pub struct DictionaryStore {
    inner: RwLock<Arc<Entries>>,
}

impl DictionaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union `entries` into the store. Existing keys are overwritten,
    /// keys absent from `entries` are kept.
    pub fn load(&self, entries: &Entries) {
        if entries.is_empty() {
            return;
        }
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let map = Arc::make_mut(&mut guard);
        for (key, value) in entries {
            map.insert(key.clone(), value.clone());
        }
    }

    /// Union every mapping in order; later mappings win.
    ///
    /// Does not clear previous state. Call [`DictionaryStore::reset`] first to
    /// rebuild from scratch.
    pub fn replace_all<'a, I>(&self, entries_list: I)
    where
        I: IntoIterator<Item = &'a Entries>,
    {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let map = Arc::make_mut(&mut guard);
        for entries in entries_list {
            for (key, value) in entries {
                map.insert(key.clone(), value.clone());
            }
        }
    }

    /// Swap in a dictionary built from `entries_list` alone, later mappings
    /// winning. Readers see either the old or the new dictionary, never a
    /// partial one.
    pub fn rebuild<'a, I>(&self, entries_list: I)
    where
        I: IntoIterator<Item = &'a Entries>,
    {
        let mut fresh = Entries::new();
        for entries in entries_list {
            for (key, value) in entries {
                fresh.insert(key.clone(), value.clone());
            }
        }
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(fresh);
    }

    /// Drop every entry.
    pub fn reset(&self) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::default();
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.get(key).cloned()
    }

    /// Snapshot of all entries.
    pub fn entries(&self) -> Dictionary {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Dictionary {
            entries: Arc::clone(&guard),
        }
    }

    /// Same as [`DictionaryStore::entries`].
    pub fn snapshot(&self) -> Dictionary {
        self.entries()
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
