use crate::cache::Cache;
use crate::error::Result;
use crate::eviction_policy::{EvictionPolicy, PolicyKind};
use crate::fifo::FifoPolicy;
use crate::lfu::LfuPolicy;
use crate::lru::LruPolicy;
use crate::random::RandomPolicy;
use std::hash::Hash;

/// A policy picked at runtime from a [`PolicyKind`].
///
/// Dispatches every [`EvictionPolicy`] call to the wrapped concrete policy,
/// so one cache type can run any built-in strategy chosen from configuration.
#[derive(Debug)]
pub enum AnyPolicy<K, V> {
    Fifo(FifoPolicy<K, V>),
    Lru(LruPolicy<K, V>),
    Lfu(LfuPolicy<K, V>),
    Random(RandomPolicy<K, V>),
}

impl<K: Hash + Eq + Clone, V> AnyPolicy<K, V> {
    pub fn new(kind: PolicyKind, capacity: usize) -> Self {
        match kind {
            PolicyKind::FIFO => AnyPolicy::Fifo(FifoPolicy::with_capacity(capacity)),
            PolicyKind::LRU => AnyPolicy::Lru(LruPolicy::with_capacity(capacity)),
            PolicyKind::LFU => AnyPolicy::Lfu(LfuPolicy::with_capacity(capacity)),
            PolicyKind::Random => AnyPolicy::Random(RandomPolicy::with_capacity(capacity)),
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $p:ident => $body:expr) => {
        match $self {
            AnyPolicy::Fifo($p) => $body,
            AnyPolicy::Lru($p) => $body,
            AnyPolicy::Lfu($p) => $body,
            AnyPolicy::Random($p) => $body,
        }
    };
}

impl<K: Hash + Eq + Clone, V> EvictionPolicy<K, V> for AnyPolicy<K, V> {
    fn kind(&self) -> PolicyKind {
        dispatch!(self, p => p.kind())
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        dispatch!(self, p => p.get(key))
    }

    fn peek(&self, key: &K) -> Option<&V> {
        dispatch!(self, p => p.peek(key))
    }

    fn contains_key(&self, key: &K) -> bool {
        dispatch!(self, p => p.contains_key(key))
    }

    fn len(&self) -> usize {
        dispatch!(self, p => p.len())
    }

    fn insert_entry(&mut self, key: K, value: V) {
        dispatch!(self, p => p.insert_entry(key, value))
    }

    fn update_value(&mut self, key: &K, value: V) {
        dispatch!(self, p => p.update_value(key, value))
    }

    fn remove_entry(&mut self, key: &K) -> Option<V> {
        dispatch!(self, p => p.remove_entry(key))
    }

    fn evict(&mut self) -> Option<(K, V)> {
        dispatch!(self, p => p.evict())
    }

    fn clear_entries(&mut self) {
        dispatch!(self, p => p.clear_entries())
    }
}

/// Configuration for a [`Cache`] whose policy is chosen at runtime.
///
/// # Examples
///
/// ```
/// use bucketcache_core::{CacheBuilder, PolicyKind};
///
/// let cache = CacheBuilder::new(100)
///     .policy("lru")
///     .build::<String, u64>()
///     .unwrap();
///
/// assert_eq!(cache.policy_kind(), PolicyKind::LRU);
/// assert_eq!(cache.capacity(), 100);
/// ```
#[derive(Clone, Debug)]
pub struct CacheBuilder {
    capacity: usize,
    policy: PolicyKind,
    name: Option<String>,
}

impl CacheBuilder {
    /// Starts a configuration for a cache of `capacity` entries, using the
    /// default (LFU) policy.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            policy: PolicyKind::default(),
            name: None,
        }
    }

    /// Selects the eviction policy, either as a [`PolicyKind`] or by name.
    pub fn policy(mut self, policy: impl Into<PolicyKind>) -> Self {
        self.policy = policy.into();
        self
    }

    /// Names the cache. With the `stats` feature the cache's counters are
    /// registered in [`stats_registry`](crate::stats_registry) under it.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Builds the cache.
    ///
    /// # Errors
    ///
    /// [`CacheError::InvalidCapacity`](crate::CacheError::InvalidCapacity) if
    /// the capacity is zero.
    pub fn build<K, V>(&self) -> Result<Cache<K, V, AnyPolicy<K, V>>>
    where
        K: Hash + Eq + Clone,
    {
        let policy = AnyPolicy::new(self.policy, self.capacity);
        let cache = Cache::with_policy(self.capacity, policy)?;

        #[cfg(feature = "stats")]
        {
            if let Some(name) = &self.name {
                crate::stats_registry::register(name, cache.shared_stats());
            }
        }

        tracing::debug!(
            policy = %self.policy,
            capacity = self.capacity,
            name = self.name.as_deref().unwrap_or("<unnamed>"),
            "built cache"
        );
        Ok(cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CacheError;

    #[test]
    fn test_builder_defaults_to_lfu() {
        let cache = CacheBuilder::new(2).build::<&str, i32>().unwrap();
        assert_eq!(cache.policy_kind(), PolicyKind::LFU);

        cache.put("A", 1);
        cache.put("B", 2);
        cache.get(&"A");
        cache.put("C", 3);
        assert!(!cache.contains_key(&"B"));
    }

    #[test]
    fn test_builder_zero_capacity() {
        let err = CacheBuilder::new(0).build::<u8, u8>().unwrap_err();
        assert_eq!(err, CacheError::InvalidCapacity(0));
    }

    #[test]
    fn test_builder_fifo() {
        let cache = CacheBuilder::new(2)
            .policy(PolicyKind::FIFO)
            .build::<&str, i32>()
            .unwrap();
        cache.put("k1", 1);
        cache.put("k2", 2);
        cache.get(&"k1");
        cache.put("k3", 3);

        assert_eq!(cache.get(&"k1"), None);
        assert_eq!(cache.get(&"k2"), Some(2));
    }

    #[test]
    fn test_builder_policy_by_name() {
        for (name, kind) in [
            ("fifo", PolicyKind::FIFO),
            ("LRU", PolicyKind::LRU),
            ("lfu", PolicyKind::LFU),
            ("random", PolicyKind::Random),
        ] {
            let cache = CacheBuilder::new(4).policy(name).build::<u32, u32>().unwrap();
            assert_eq!(cache.policy_kind(), kind);
        }
    }

    #[test]
    fn test_any_policy_random_respects_capacity() {
        let cache = CacheBuilder::new(5)
            .policy(PolicyKind::Random)
            .build::<u32, u32>()
            .unwrap();
        for i in 0..50 {
            cache.put(i, i);
            assert!(cache.len() <= 5);
        }
        assert!(cache.contains_key(&49));
    }
}
