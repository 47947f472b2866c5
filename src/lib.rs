//! # Bucketcache
//!
//! A bounded, thread-safe cache for Rust with pluggable eviction policies and
//! an O(1) Least-Frequently-Used engine.
//!
//! ## Features
//!
//! - **Bounded**: a fixed capacity, enforced after every call
//! - **Thread-safe**: one `parking_lot` mutex per cache, every call linearizable
//! - **O(1) LFU**: frequency buckets plus a tracked minimum, LRU tie-break
//! - **Pluggable**: LRU, FIFO and Random policies, or your own [`EvictionPolicy`]
//! - **Observable**: per-cache hit/miss/eviction counters and a named registry
//!
//! ## Quick Start
//!
//! ```rust
//! use bucketcache::Cache;
//!
//! let cache = Cache::new(2).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//!
//! // reading "a" raises its frequency above "b"
//! assert_eq!(cache.get(&"a"), Some(1));
//!
//! // the cache is full: the least frequently used key makes room
//! cache.put("c", 3);
//! assert_eq!(cache.get(&"b"), None);
//! assert_eq!(cache.len(), 2);
//! ```
//!
//! ## Sharing Between Threads
//!
//! ```rust
//! use bucketcache::Cache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(Cache::new(128).unwrap());
//! let handles: Vec<_> = (0..4u64)
//!     .map(|t| {
//!         let cache = Arc::clone(&cache);
//!         thread::spawn(move || {
//!             for i in 0..32 {
//!                 cache.put(t * 100 + i, i);
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.len(), 128);
//! ```
//!
//! ## Choosing a Policy at Runtime
//!
//! ```rust
//! use bucketcache::{CacheBuilder, PolicyKind};
//!
//! let cache = CacheBuilder::new(64)
//!     .policy("fifo")
//!     .build::<String, Vec<u8>>()
//!     .unwrap();
//! assert_eq!(cache.policy_kind(), PolicyKind::FIFO);
//! ```

pub use bucketcache_core::*;

#[cfg(feature = "stats")]
use std::sync::Arc;

/// Statistics of the cache registered under `name`
///
/// Caches get a name through [`CacheBuilder::name`].
///
/// # Examples
///
/// ```rust
/// use bucketcache::{cache_stats, CacheBuilder};
///
/// let cache = CacheBuilder::new(8).name("thumbnails").build::<u32, u32>().unwrap();
/// cache.put(1, 1);
/// cache.get(&1);
///
/// let stats = cache_stats("thumbnails").unwrap();
/// assert_eq!(stats.hits(), 1);
/// ```
#[cfg(feature = "stats")]
pub fn cache_stats(name: &str) -> Option<Arc<CacheStats>> {
    stats_registry::get(name)
}

/// Names of every cache registered for statistics
#[cfg(feature = "stats")]
pub fn registered_caches() -> Vec<String> {
    stats_registry::list()
}
