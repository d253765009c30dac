//! The keyed store contract.

use std::fmt::Debug;
use std::hash::Hash;

use linkgraph_core::StoreError;

/// A keyed map with strict existence rules.
///
/// - `insert` fails with `KeyExists` if the key is present
/// - `get`, `get_mut`, `update` and `remove` fail with `KeyMissing` if it is absent
///
/// Callers that want upsert or optional-lookup semantics use the provided
/// [`lookup`](KeyedStore::lookup) and [`upsert`](KeyedStore::upsert) helpers.
/// Iteration order is unspecified.
pub trait KeyedStore<K, V>
where
    K: Hash + Eq + Debug,
{
    /// Whether `key` holds a value.
    fn contains(&self, key: &K) -> bool;

    /// Borrow the value at `key`.
    fn get(&self, key: &K) -> Result<&V, StoreError>;

    /// Mutably borrow the value at `key`.
    fn get_mut(&mut self, key: &K) -> Result<&mut V, StoreError>;

    /// Store a value under a key that must be absent.
    fn insert(&mut self, key: K, value: V) -> Result<(), StoreError>;

    /// Replace the value under a key that must be present, returning the old value.
    fn update(&mut self, key: &K, value: V) -> Result<V, StoreError>;

    /// Remove and return the value under a key that must be present.
    fn remove(&mut self, key: &K) -> Result<V, StoreError>;

    /// Number of stored keys.
    fn len(&self) -> usize;

    /// All entries, in no particular order.
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>;

    /// Whether the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the value at `key` if present.
    fn lookup(&self, key: &K) -> Option<&V> {
        if self.contains(key) {
            self.get(key).ok()
        } else {
            None
        }
    }

    /// Insert or overwrite, returning the previous value if there was one.
    fn upsert(&mut self, key: K, value: V) -> Option<V> {
        if self.contains(&key) {
            self.update(&key, value).ok()
        } else {
            // Absence was just checked; insert cannot fail.
            self.insert(key, value).ok();
            None
        }
    }

    /// Remove the value at `key` if present.
    fn take(&mut self, key: &K) -> Option<V> {
        if self.contains(key) {
            self.remove(key).ok()
        } else {
            None
        }
    }
}
