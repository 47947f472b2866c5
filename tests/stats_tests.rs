#![cfg(feature = "stats")]

use bucketcache::{cache_stats, registered_caches, stats_registry, CacheBuilder, PolicyKind};
use serial_test::serial;

#[test]
#[serial]
fn test_named_cache_registers_stats() {
    stats_registry::clear();

    let cache = CacheBuilder::new(2)
        .name("user_profiles")
        .build::<u32, String>()
        .unwrap();

    cache.put(1, "alice".to_string());
    cache.put(2, "bob".to_string());
    cache.get(&1);
    cache.get(&3);
    cache.put(3, "carol".to_string()); // evicts 2

    let stats = cache_stats("user_profiles").unwrap();
    assert_eq!(stats.hits(), 1);
    assert_eq!(stats.misses(), 1);
    assert_eq!(stats.insertions(), 3);
    assert_eq!(stats.evictions(), 1);
    assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);

    // the registry shares the live counters with the cache
    cache.get(&1);
    assert_eq!(stats.hits(), 2);
    assert_eq!(cache.stats().hits(), 2);
}

#[test]
#[serial]
fn test_unnamed_cache_is_not_registered() {
    stats_registry::clear();

    let cache = CacheBuilder::new(4)
        .policy(PolicyKind::LRU)
        .build::<u32, u32>()
        .unwrap();
    cache.put(1, 1);

    assert!(registered_caches().is_empty());
}

#[test]
#[serial]
fn test_rebuilding_a_name_replaces_registration() {
    stats_registry::clear();

    let first = CacheBuilder::new(4).name("shared").build::<u32, u32>().unwrap();
    first.get(&1);
    let second = CacheBuilder::new(4).name("shared").build::<u32, u32>().unwrap();
    second.put(1, 1);
    second.get(&1);

    let stats = cache_stats("shared").unwrap();
    assert_eq!(stats.hits(), 1);
    assert_eq!(stats.misses(), 0);
    assert_eq!(registered_caches(), vec!["shared".to_string()]);

    assert!(stats_registry::reset("shared"));
    assert_eq!(second.stats().hits(), 0);
}

#[test]
#[serial]
fn test_stats_count_only_lookups() {
    stats_registry::clear();

    let cache = CacheBuilder::new(4).name("lookups").build::<u32, u32>().unwrap();
    cache.put(1, 1);
    cache.contains_key(&1);
    cache.peek(&1);
    cache.remove(&1);

    let stats = cache_stats("lookups").unwrap();
    assert_eq!(stats.total_accesses(), 0);
    assert_eq!(stats.insertions(), 1);
}
