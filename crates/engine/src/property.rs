//! Keyed property overlay.
//!
//! At most one payload per key. Setting overwrites and hands back the old
//! payload; unsetting an absent key is not an error.

use std::fmt::Debug;
use std::hash::Hash;

use linkgraph_storage::{KeyedStore, MemoryStore};

/// Keyed payload overlay on top of a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct KeyedPropertyStore<K, P> {
    store: MemoryStore<K, P>,
}

impl<K, P> KeyedPropertyStore<K, P> {
    /// Empty overlay.
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
        }
    }
}

impl<K, P> Default for KeyedPropertyStore<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> KeyedPropertyStore<K, P>
where
    K: Hash + Eq + Debug,
{
    /// Attach `props` to `key`, returning whatever was there before.
    pub fn set(&mut self, key: K, props: P) -> Option<P> {
        self.store.upsert(key, props)
    }

    /// Payload at `key`, if any.
    pub fn get(&self, key: &K) -> Option<&P> {
        self.store.lookup(key)
    }

    /// Detach and return the payload at `key`, if any.
    pub fn unset(&mut self, key: &K) -> Option<P> {
        self.store.take(key)
    }

    /// Whether `key` carries a payload.
    pub fn contains(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    /// Number of annotated keys.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether no key is annotated.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// All `(key, payload)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &P)> + '_ {
        self.store.iter()
    }
}
