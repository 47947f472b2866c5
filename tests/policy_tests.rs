use bucketcache::{
    Cache, CacheBuilder, EvictionPolicy, FifoPolicy, LruPolicy, PolicyKind, RandomPolicy,
};
use std::collections::HashMap;

/// Most-Recently-Used: evicts the key touched last. Only here to show a
/// policy written outside the crate plugs into the same contract.
#[derive(Default)]
struct MruPolicy {
    entries: HashMap<u32, u32>,
    last: Option<u32>,
}

impl EvictionPolicy<u32, u32> for MruPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::LRU
    }

    fn get(&mut self, key: &u32) -> Option<&u32> {
        if self.entries.contains_key(key) {
            self.last = Some(*key);
        }
        self.entries.get(key)
    }

    fn peek(&self, key: &u32) -> Option<&u32> {
        self.entries.get(key)
    }

    fn contains_key(&self, key: &u32) -> bool {
        self.entries.contains_key(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn insert_entry(&mut self, key: u32, value: u32) {
        self.entries.insert(key, value);
        self.last = Some(key);
    }

    fn update_value(&mut self, key: &u32, value: u32) {
        self.entries.insert(*key, value);
        self.last = Some(*key);
    }

    fn remove_entry(&mut self, key: &u32) -> Option<u32> {
        if self.last == Some(*key) {
            self.last = None;
        }
        self.entries.remove(key)
    }

    fn evict(&mut self) -> Option<(u32, u32)> {
        let key = self.last.take().or_else(|| self.entries.keys().next().copied())?;
        self.entries.remove(&key).map(|v| (key, v))
    }

    fn clear_entries(&mut self) {
        self.entries.clear();
        self.last = None;
    }
}

#[test]
fn test_custom_policy_plugs_into_cache() {
    let cache = Cache::with_policy(2, MruPolicy::default()).unwrap();
    cache.put(1, 10);
    cache.put(2, 20);
    cache.get(&1);
    cache.put(3, 30); // evicts 1, the most recently used

    assert!(!cache.contains_key(&1));
    assert!(cache.contains_key(&2));
    assert!(cache.contains_key(&3));
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_lru_eviction() {
    let cache = Cache::with_policy(3, LruPolicy::new()).unwrap();
    cache.put("k1", 1);
    cache.put("k2", 2);
    cache.put("k3", 3);
    cache.get(&"k1");
    cache.put("k2", 22); // update counts as use
    cache.put("k4", 4); // evicts k3

    assert_eq!(cache.get(&"k3"), None);
    assert_eq!(cache.get(&"k1"), Some(1));
    assert_eq!(cache.get(&"k2"), Some(22));
    assert_eq!(cache.get(&"k4"), Some(4));
}

#[test]
fn test_fifo_eviction_ignores_reads() {
    let cache = Cache::with_policy(2, FifoPolicy::new()).unwrap();
    cache.put("k1", 1);
    cache.put("k2", 2);
    for _ in 0..5 {
        cache.get(&"k1");
    }
    cache.put("k3", 3);

    assert_eq!(cache.get(&"k1"), None);
    assert_eq!(cache.get(&"k2"), Some(2));
    assert_eq!(cache.get(&"k3"), Some(3));
}

#[test]
fn test_random_policy_keeps_values_correct() {
    let cache = Cache::with_policy(5, RandomPolicy::with_seed(99)).unwrap();
    for i in 1..=20u32 {
        cache.put(i, i.pow(2));
        assert!(cache.len() <= 5);
    }
    assert_eq!(cache.len(), 5);
    for i in 1..=20u32 {
        if let Some(v) = cache.get(&i) {
            assert_eq!(v, i.pow(2));
        }
    }
    // the newest key is never the victim of its own insertion
    assert!(cache.contains_key(&20));
}

#[test]
fn test_every_builtin_policy_honours_the_contract() {
    for kind in [
        PolicyKind::FIFO,
        PolicyKind::LRU,
        PolicyKind::LFU,
        PolicyKind::Random,
    ] {
        let cache = CacheBuilder::new(3).policy(kind).build::<u32, u32>().unwrap();

        for i in 0..3 {
            cache.put(i, i);
        }
        // updating a present key in a full cache never evicts
        cache.put(0, 100);
        assert_eq!(cache.len(), 3, "{kind}");
        assert_eq!(cache.peek(&0), Some(100), "{kind}");

        // inserting a new key evicts exactly one
        cache.put(3, 3);
        assert_eq!(cache.len(), 3, "{kind}");
        assert!(cache.contains_key(&3), "{kind}");

        assert_eq!(cache.remove(&3), Some(3), "{kind}");
        assert_eq!(cache.remove(&3), None, "{kind}");
        assert_eq!(cache.len(), 2, "{kind}");

        cache.clear();
        assert!(cache.is_empty(), "{kind}");
        assert_eq!(cache.get(&0), None, "{kind}");
    }
}
