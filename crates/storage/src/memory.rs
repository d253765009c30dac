//! In-memory keyed store
//!
//! FxHashMap-backed implementation of [`KeyedStore`]. One store holds the
//! entries of one logical map of one graph instance; the embedding
//! environment serializes access, so there is no internal locking.

use std::fmt::Debug;
use std::hash::Hash;

use linkgraph_core::StoreError;
use rustc_hash::FxHashMap;

use crate::traits::KeyedStore;

/// FxHashMap-backed keyed store.
#[derive(Debug, Clone)]
pub struct MemoryStore<K, V> {
    data: FxHashMap<K, V>,
}

impl<K, V> MemoryStore<K, V> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            data: FxHashMap::default(),
        }
    }

    /// Create a store with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }
}

impl<K, V> Default for MemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> KeyedStore<K, V> for MemoryStore<K, V>
where
    K: Hash + Eq + Debug,
{
    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.data.contains_key(key)
    }

    #[inline]
    fn get(&self, key: &K) -> Result<&V, StoreError> {
        self.data.get(key).ok_or_else(|| StoreError::missing(key))
    }

    #[inline]
    fn get_mut(&mut self, key: &K) -> Result<&mut V, StoreError> {
        self.data.get_mut(key).ok_or_else(|| StoreError::missing(key))
    }

    fn insert(&mut self, key: K, value: V) -> Result<(), StoreError> {
        if self.data.contains_key(&key) {
            return Err(StoreError::exists(&key));
        }
        self.data.insert(key, value);
        Ok(())
    }

    fn update(&mut self, key: &K, value: V) -> Result<V, StoreError> {
        match self.data.get_mut(key) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(StoreError::missing(key)),
        }
    }

    fn remove(&mut self, key: &K) -> Result<V, StoreError> {
        self.data.remove(key).ok_or_else(|| StoreError::missing(key))
    }

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a> {
        Box::new(self.data.iter())
    }
}
