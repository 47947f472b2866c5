use crate::eviction_policy::{EvictionPolicy, PolicyKind};
use indexmap::IndexMap;
use std::hash::Hash;

/// Random replacement.
///
/// Entries live in an `IndexMap` so a victim can be picked by position and
/// removed with `swap_remove_index`, both O(1). Reads never change anything.
#[derive(Debug)]
pub struct RandomPolicy<K, V> {
    entries: IndexMap<K, V>,
    rng: fastrand::Rng,
}

impl<K: Hash + Eq, V> RandomPolicy<K, V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            rng: fastrand::Rng::new(),
        }
    }

    /// Uses a fixed seed so the sequence of victims is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            entries: IndexMap::new(),
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl<K: Hash + Eq, V> Default for RandomPolicy<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> EvictionPolicy<K, V> for RandomPolicy<K, V> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Random
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn insert_entry(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    fn update_value(&mut self, key: &K, value: V) {
        if let Some(slot) = self.entries.get_mut(key) {
            *slot = value;
        }
    }

    fn remove_entry(&mut self, key: &K) -> Option<V> {
        self.entries.swap_remove(key)
    }

    fn evict(&mut self) -> Option<(K, V)> {
        if self.entries.is_empty() {
            return None;
        }
        let pos = self.rng.usize(..self.entries.len());
        self.entries.swap_remove_index(pos)
    }

    fn clear_entries(&mut self) {
        self.entries.clear();
    }
}
