use crate::eviction_policy::{EvictionPolicy, PolicyKind};
use hashlink::LinkedHashSet;
use std::collections::HashMap;
use std::hash::Hash;

/// Least-Frequently-Used bookkeeping with O(1) get, insert and eviction.
///
/// Three indexes are kept in lock-step:
///
/// * `values` - key to cached value
/// * `frequencies` - key to access count (always `>= 1`)
/// * `buckets` - access count to the keys currently at that count, in the
///   order they arrived in the tier
///
/// plus `min_frequency`, the smallest key of `buckets`. Finding the victim is
/// therefore a lookup of the `min_frequency` bucket and a pop from its front,
/// which gives LFU with an LRU tie-break inside a frequency tier.
///
/// # Invariants
///
/// * `values` and `frequencies` hold exactly the same keys
/// * a key lives in exactly one bucket, the one matching its frequency
/// * no bucket is ever empty
/// * `min_frequency == min(buckets.keys())` while non-empty, `1` when empty
///
/// # Examples
///
/// ```
/// use bucketcache_core::{EvictionPolicy, LfuPolicy};
///
/// let mut lfu = LfuPolicy::new();
/// lfu.insert_entry("a", 1);
/// lfu.insert_entry("b", 2);
///
/// // "a" moves to frequency 2, "b" stays behind at 1
/// assert_eq!(lfu.get(&"a"), Some(&1));
/// assert_eq!(lfu.frequency(&"a"), Some(2));
///
/// assert_eq!(lfu.evict(), Some(("b", 2)));
/// ```
#[derive(Debug)]
pub struct LfuPolicy<K, V> {
    values: HashMap<K, V>,
    frequencies: HashMap<K, u64>,
    buckets: HashMap<u64, LinkedHashSet<K>>,
    min_frequency: u64,
}

impl<K: Hash + Eq + Clone, V> LfuPolicy<K, V> {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            frequencies: HashMap::new(),
            buckets: HashMap::new(),
            min_frequency: 1,
        }
    }

    /// Creates an empty policy with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: HashMap::with_capacity(capacity),
            frequencies: HashMap::with_capacity(capacity),
            buckets: HashMap::new(),
            min_frequency: 1,
        }
    }

    /// Current access count of `key`, `None` if absent.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.frequencies.get(key).copied()
    }

    /// Lowest access count among the live entries (`1` when empty).
    pub fn min_frequency(&self) -> u64 {
        self.min_frequency
    }

    /// Moves `key` from its bucket to the next one up.
    fn promote(&mut self, key: &K) {
        let Some(frequency) = self.frequencies.get_mut(key) else {
            return;
        };
        let current = *frequency;
        *frequency = current + 1;

        if self.detach(key, current) {
            // The promoted key was alone in the lowest tier and is now in the
            // next one, so nothing can sit below it.
            self.min_frequency = current + 1;
        }
        self.buckets
            .entry(current + 1)
            .or_insert_with(LinkedHashSet::new)
            .insert(key.clone());
    }

    /// Takes `key` out of the bucket for `frequency`, dropping the bucket if
    /// it becomes empty. Returns `true` when that bucket was the minimum.
    fn detach(&mut self, key: &K, frequency: u64) -> bool {
        let emptied = match self.buckets.get_mut(&frequency) {
            Some(bucket) => {
                bucket.remove(key);
                bucket.is_empty()
            }
            None => false,
        };
        if emptied {
            self.buckets.remove(&frequency);
        }
        emptied && frequency == self.min_frequency
    }

    fn recompute_min_frequency(&mut self) {
        self.min_frequency = self.buckets.keys().copied().min().unwrap_or(1);
    }
}

impl<K: Hash + Eq + Clone, V> Default for LfuPolicy<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone, V> EvictionPolicy<K, V> for LfuPolicy<K, V> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::LFU
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        if !self.values.contains_key(key) {
            return None;
        }
        self.promote(key);
        self.values.get(key)
    }

    fn peek(&self, key: &K) -> Option<&V> {
        self.values.get(key)
    }

    fn contains_key(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn insert_entry(&mut self, key: K, value: V) {
        debug_assert!(
            !self.values.contains_key(&key),
            "insert_entry called for a present key"
        );
        self.frequencies.insert(key.clone(), 1);
        self.buckets
            .entry(1)
            .or_insert_with(LinkedHashSet::new)
            .insert(key.clone());
        self.values.insert(key, value);
        self.min_frequency = 1;
    }

    fn update_value(&mut self, key: &K, value: V) {
        if let Some(slot) = self.values.get_mut(key) {
            *slot = value;
            self.promote(key);
        }
    }

    fn remove_entry(&mut self, key: &K) -> Option<V> {
        let value = self.values.remove(key)?;
        if let Some(frequency) = self.frequencies.remove(key) {
            if self.detach(key, frequency) {
                self.recompute_min_frequency();
            }
        }
        Some(value)
    }

    fn evict(&mut self) -> Option<(K, V)> {
        let bucket = self.buckets.get_mut(&self.min_frequency)?;
        let key = bucket.pop_front()?;
        if bucket.is_empty() {
            self.buckets.remove(&self.min_frequency);
            self.recompute_min_frequency();
        }
        self.frequencies.remove(&key);
        let value = self.values.remove(&key)?;
        Some((key, value))
    }

    fn clear_entries(&mut self) {
        self.values.clear();
        self.frequencies.clear();
        self.buckets.clear();
        self.min_frequency = 1;
    }
}
