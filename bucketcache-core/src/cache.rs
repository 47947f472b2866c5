use crate::error::{CacheError, Result};
use crate::eviction_policy::{EvictionPolicy, PolicyKind};
use crate::lfu::LfuPolicy;
use parking_lot::Mutex;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::num::NonZeroUsize;
#[cfg(feature = "stats")]
use std::sync::Arc;
use tracing::{debug, trace};

#[cfg(feature = "stats")]
use crate::CacheStats;

/// A bounded, thread-safe cache whose eviction strategy is a pluggable
/// [`EvictionPolicy`].
///
/// The cache owns the parts every policy shares: the fixed capacity, the
/// lock, and the put/remove/clear protocol. The policy owns the indexes and
/// decides what an access does and which entry goes when room is needed.
/// The default policy is [`LfuPolicy`].
///
/// # Thread Safety
///
/// The whole policy sits behind one `parking_lot::Mutex`, held for the full
/// duration of each public call, so every call is linearizable: it observes
/// and mutates the state as a single atomic step. Reads take the same lock
/// because an LFU or LRU read is itself a mutation. `parking_lot` locks do
/// not poison, and the guard is released on every exit path, including a
/// panic unwinding through the cache.
///
/// Share a cache between threads with `Arc<Cache<..>>`.
///
/// # Capacity
///
/// After any public call returns, `len() <= capacity()`. A `put` of a new key
/// into a full cache evicts exactly one entry first; a `put` of a key that is
/// already cached never evicts.
///
/// # Examples
///
/// ```
/// use bucketcache_core::Cache;
///
/// let cache = Cache::new(2).unwrap();
/// cache.put("a", 1);
/// cache.put("b", 2);
///
/// // "a" is now at frequency 2, "b" is still at 1
/// assert_eq!(cache.get(&"a"), Some(1));
///
/// cache.put("c", 3);
/// assert!(!cache.contains_key(&"b"));
/// assert!(cache.contains_key(&"a"));
/// assert!(cache.contains_key(&"c"));
/// ```
///
/// A zero capacity is a configuration error:
///
/// ```
/// use bucketcache_core::{Cache, CacheError};
///
/// let err = Cache::<u32, u32>::new(0).unwrap_err();
/// assert_eq!(err, CacheError::InvalidCapacity(0));
/// ```
pub struct Cache<K, V, P = LfuPolicy<K, V>> {
    policy: Mutex<P>,
    capacity: NonZeroUsize,
    #[cfg(feature = "stats")]
    stats: Arc<CacheStats>,
    _marker: PhantomData<fn(K, V)>,
}

impl<K, V> Cache<K, V, LfuPolicy<K, V>>
where
    K: Hash + Eq + Clone,
{
    /// Creates an empty LFU cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// [`CacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = validate_capacity(capacity)?;
        Ok(Self::from_parts(
            capacity,
            LfuPolicy::with_capacity(capacity.get()),
        ))
    }
}

impl<K, V, P> Cache<K, V, P>
where
    P: EvictionPolicy<K, V>,
{
    /// Creates a cache around an existing policy.
    ///
    /// If the policy already holds more than `capacity` entries, its own
    /// victims are evicted until it fits.
    ///
    /// # Errors
    ///
    /// [`CacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_policy(capacity: usize, mut policy: P) -> Result<Self> {
        let capacity = validate_capacity(capacity)?;
        while policy.len() > capacity.get() {
            if policy.evict().is_none() {
                break;
            }
        }
        Ok(Self::from_parts(capacity, policy))
    }

    fn from_parts(capacity: NonZeroUsize, policy: P) -> Self {
        Self {
            policy: Mutex::new(policy),
            capacity,
            #[cfg(feature = "stats")]
            stats: Arc::new(CacheStats::new()),
            _marker: PhantomData,
        }
    }

    /// Returns a clone of the value cached under `key`.
    ///
    /// A hit counts as an access for the policy (for LFU the key is promoted
    /// to the next frequency tier). A miss changes nothing and never evicts.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let mut policy = self.policy.lock();
        let value = policy.get(key).cloned();

        #[cfg(feature = "stats")]
        {
            if value.is_some() {
                self.stats.record_hit();
            } else {
                self.stats.record_miss();
            }
        }

        value
    }

    /// Returns a clone of the value under `key` without counting an access.
    pub fn peek(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.policy.lock().peek(key).cloned()
    }

    /// Inserts or replaces the value under `key`.
    ///
    /// * key present: the value is replaced and the policy's access
    ///   semantics apply; nothing is evicted
    /// * key absent, cache full: the policy evicts exactly one entry, then
    ///   the new entry is created
    /// * key absent, room left: the new entry is created
    ///
    /// The three steps run inside one critical section.
    pub fn put(&self, key: K, value: V) {
        let mut policy = self.policy.lock();
        self.put_locked(&mut policy, key, value);
    }

    /// Returns the value under `key`, computing and caching it with `init`
    /// on a miss.
    ///
    /// `init` runs while the lock is held, so concurrent callers for the same
    /// key compute it once. It must not call back into this cache.
    pub fn get_or_insert_with<F>(&self, key: K, init: F) -> V
    where
        V: Clone,
        F: FnOnce() -> V,
    {
        let mut policy = self.policy.lock();
        if let Some(value) = policy.get(&key) {
            #[cfg(feature = "stats")]
            self.stats.record_hit();
            return value.clone();
        }

        #[cfg(feature = "stats")]
        self.stats.record_miss();

        let value = init();
        self.put_locked(&mut policy, key, value.clone());
        value
    }

    fn put_locked(&self, policy: &mut P, key: K, value: V) {
        if policy.contains_key(&key) {
            trace!(policy = %policy.kind(), "updating cached entry");
            policy.update_value(&key, value);
            return;
        }

        if policy.len() >= self.capacity.get() && policy.evict().is_some() {
            debug!(
                policy = %policy.kind(),
                capacity = self.capacity.get(),
                "evicted entry to make room"
            );
            #[cfg(feature = "stats")]
            self.stats.record_eviction();
        }

        trace!(policy = %policy.kind(), "inserting cache entry");
        policy.insert_entry(key, value);

        #[cfg(feature = "stats")]
        self.stats.record_insertion();
    }

    /// Removes `key`, returning its value. Absent keys are a silent no-op.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.policy.lock().remove_entry(key)
    }

    /// Drops every entry and resets the policy to its empty baseline.
    pub fn clear(&self) {
        let mut policy = self.policy.lock();
        let dropped = policy.len();
        policy.clear_entries();
        debug!(policy = %policy.kind(), dropped, "cleared cache");
    }

    /// Whether `key` is cached. Does not count as an access.
    pub fn contains_key(&self, key: &K) -> bool {
        self.policy.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.policy.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.policy.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn policy_kind(&self) -> PolicyKind {
        self.policy.lock().kind()
    }

    /// Runs `f` against the policy while holding the lock.
    ///
    /// Only shared access is handed out, so the policy's indexes cannot be
    /// changed behind the cache's back.
    ///
    /// ```
    /// use bucketcache_core::Cache;
    ///
    /// let cache = Cache::new(4).unwrap();
    /// cache.put("hot", ());
    /// cache.get(&"hot");
    /// assert_eq!(cache.with_policy_ref(|lfu| lfu.frequency(&"hot")), Some(2));
    /// ```
    pub fn with_policy_ref<R>(&self, f: impl FnOnce(&P) -> R) -> R {
        f(&self.policy.lock())
    }

    /// Hit, miss, insertion and eviction counters of this cache.
    #[cfg(feature = "stats")]
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    #[cfg(feature = "stats")]
    pub(crate) fn shared_stats(&self) -> Arc<CacheStats> {
        Arc::clone(&self.stats)
    }
}

impl<K, V, P> fmt::Debug for Cache<K, V, P>
where
    P: EvictionPolicy<K, V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let policy = self.policy.lock();
        f.debug_struct("Cache")
            .field("policy", &policy.kind())
            .field("capacity", &self.capacity)
            .field("len", &policy.len())
            .finish()
    }
}

fn validate_capacity(capacity: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(capacity).ok_or(CacheError::InvalidCapacity(capacity))
}
