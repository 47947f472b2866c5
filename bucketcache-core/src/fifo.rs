use crate::eviction_policy::{EvictionPolicy, PolicyKind};
use hashlink::LinkedHashMap;
use std::hash::Hash;

/// First-In-First-Out bookkeeping: insertion order only, reads and updates
/// never reorder.
#[derive(Debug)]
pub struct FifoPolicy<K, V> {
    entries: LinkedHashMap<K, V>,
}

impl<K: Hash + Eq, V> FifoPolicy<K, V> {
    pub fn new() -> Self {
        Self {
            entries: LinkedHashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: LinkedHashMap::with_capacity(capacity),
        }
    }
}

impl<K: Hash + Eq, V> Default for FifoPolicy<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> EvictionPolicy<K, V> for FifoPolicy<K, V> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::FIFO
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
        self.entries.remove(key)
    }

    fn evict(&mut self) -> Option<(K, V)> {
        self.entries.pop_front()
    }

    fn clear_entries(&mut self) {
        self.entries.clear();
    }
}
