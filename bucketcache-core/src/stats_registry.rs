use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::CacheStats;

/// Process-wide lookup of cache statistics by name.
///
/// Named caches built through [`CacheBuilder::name`](crate::CacheBuilder::name)
/// register their counters here, so monitoring code can read them without a
/// handle on the cache itself. The registry holds an `Arc` to the live
/// counters, not a copy.
///
/// # Examples
///
/// ```
/// use bucketcache_core::stats_registry;
/// use bucketcache_core::CacheBuilder;
///
/// let cache = CacheBuilder::new(16)
///     .name("sessions")
///     .build::<u64, String>()
///     .unwrap();
/// cache.get(&1);
///
/// let stats = stats_registry::get("sessions").unwrap();
/// assert_eq!(stats.misses(), 1);
/// ```
static STATS_REGISTRY: Lazy<RwLock<HashMap<String, Arc<CacheStats>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Registers `stats` under `name`, replacing any previous registration.
pub fn register(name: &str, stats: Arc<CacheStats>) {
    let mut registry = STATS_REGISTRY.write();
    if registry.insert(name.to_string(), stats).is_some() {
        tracing::debug!(name, "replaced registered cache statistics");
    }
}

/// Live counters registered under `name`.
pub fn get(name: &str) -> Option<Arc<CacheStats>> {
    let registry = STATS_REGISTRY.read();
    registry.get(name).cloned()
}

/// Point-in-time copy of the counters registered under `name`.
pub fn snapshot(name: &str) -> Option<CacheStats> {
    let registry = STATS_REGISTRY.read();
    registry.get(name).map(|stats| (**stats).clone())
}

/// Names of every registered cache, in no particular order.
pub fn list() -> Vec<String> {
    let registry = STATS_REGISTRY.read();
    registry.keys().cloned().collect()
}

/// Drops the registration for `name`. Returns `true` if it existed.
pub fn unregister(name: &str) -> bool {
    let mut registry = STATS_REGISTRY.write();
    registry.remove(name).is_some()
}

/// Resets the counters registered under `name`.
///
/// Returns `false` if nothing is registered under that name.
pub fn reset(name: &str) -> bool {
    let registry = STATS_REGISTRY.read();
    if let Some(stats) = registry.get(name) {
        stats.reset();
        true
    } else {
        false
    }
}

/// Removes every registration. The counters themselves are left untouched.
pub fn clear() {
    let mut registry = STATS_REGISTRY.write();
    registry.clear();
}
