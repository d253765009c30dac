//! Per-source adjacency sets.
//!
//! An adjacency set holds the distinct outgoing targets of one source. It is
//! used with plain account targets by the relationship graph and with
//! `(node, label)` tuples by the labeled graph. Iteration order is
//! unspecified; use [`AdjacencySet::to_sorted_vec`] when a stable order is needed.

use std::hash::Hash;

use rustc_hash::FxHashSet;

/// Set of distinct outgoing targets of one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencySet<T: Hash + Eq> {
    targets: FxHashSet<T>,
}

impl<T: Hash + Eq> AdjacencySet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            targets: FxHashSet::default(),
        }
    }

    /// Create a set holding exactly one target.
    pub fn singleton(target: T) -> Self {
        let mut set = Self::new();
        set.targets.insert(target);
        set
    }

    /// Add a target. Returns false if it was already present.
    pub fn insert(&mut self, target: T) -> bool {
        self.targets.insert(target)
    }

    /// Remove a target. Returns false if it was absent.
    pub fn remove(&mut self, target: &T) -> bool {
        self.targets.remove(target)
    }

    /// Whether `target` is in the set.
    pub fn contains(&self, target: &T) -> bool {
        self.targets.contains(target)
    }

    /// Number of targets (the out-degree).
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterate targets in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.targets.iter()
    }

    /// Count targets matching `pred`. Linear in the out-degree.
    pub fn count_where<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.targets.iter().filter(|t| pred(t)).count()
    }

    /// Consume the set, yielding its targets.
    pub fn into_targets(self) -> impl Iterator<Item = T> {
        self.targets.into_iter()
    }
}

impl<T: Hash + Eq + Ord + Clone> AdjacencySet<T> {
    /// Targets in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<T> {
        let mut out: Vec<T> = self.targets.iter().cloned().collect();
        out.sort();
        out
    }
}

impl<T: Hash + Eq> Default for AdjacencySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for AdjacencySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            targets: iter.into_iter().collect(),
        }
    }
}
