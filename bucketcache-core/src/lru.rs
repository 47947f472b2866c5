use crate::eviction_policy::{EvictionPolicy, PolicyKind};
use hashlink::LinkedHashMap;
use std::hash::Hash;

/// Least-Recently-Used bookkeeping.
///
/// Entries are kept in a linked hash map ordered from least to most recently
/// used. A read or an update moves the entry to the back; the victim is the
/// front entry.
#[derive(Debug)]
pub struct LruPolicy<K, V> {
    entries: LinkedHashMap<K, V>,
}

impl<K: Hash + Eq, V> LruPolicy<K, V> {
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

impl<K: Hash + Eq, V> Default for LruPolicy<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> EvictionPolicy<K, V> for LruPolicy<K, V> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::LRU
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        self.entries.to_back(key).map(|v| &*v)
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
        if let Some(slot) = self.entries.to_back(key) {
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
