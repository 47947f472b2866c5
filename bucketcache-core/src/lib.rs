//! # Bucketcache Core
//!
//! A bounded, thread-safe in-memory cache with pluggable eviction policies.
//!
//! The flagship policy is LFU with O(1) get, put and eviction: keys are kept
//! in per-frequency buckets and the lowest populated frequency is tracked
//! incrementally, so finding the victim never scans the cache.
//!
//! ## Features
//!
//! - **Cache contract**: [`Cache`] enforces a fixed capacity and serializes
//!   every operation under one `parking_lot::Mutex`
//! - **Eviction policies**: LFU (default), LRU, FIFO and Random, all behind the
//!   [`EvictionPolicy`] trait
//! - **Runtime configuration**: [`CacheBuilder`] picks the policy by name
//! - **Statistics**: hit/miss/insert/evict counters (`stats` feature, on by default)
//! - **Content keys**: [`hashing::ContentKey`] keys a cache by a SHA-2 digest
//!
//! ## Module Organization
//!
//! - [`cache`](Cache) - the locking contract shared by every policy
//! - [`eviction_policy`](EvictionPolicy) - the policy trait and [`PolicyKind`]
//! - [`lfu`](LfuPolicy), [`lru`](LruPolicy), [`fifo`](FifoPolicy),
//!   [`random`](RandomPolicy) - the built-in policies
//! - [`builder`](CacheBuilder) - runtime policy selection
//! - [`hashing`] - content digests for cache keys
//!
mod builder;
mod cache;
mod error;
mod eviction_policy;
mod fifo;
mod lfu;
mod lru;
mod random;

pub mod hashing;

#[cfg(feature = "stats")]
mod stats;

#[cfg(feature = "stats")]
pub mod stats_registry;

pub use builder::{AnyPolicy, CacheBuilder};
pub use cache::Cache;
pub use error::{CacheError, Result};
pub use eviction_policy::{EvictionPolicy, PolicyKind};
pub use fifo::FifoPolicy;
pub use lfu::LfuPolicy;
pub use lru::LruPolicy;
pub use random::RandomPolicy;

#[cfg(feature = "stats")]
pub use stats::CacheStats;
