/// Identifies which eviction strategy a cache runs with.
///
/// The kind is what configuration talks about; the behaviour itself lives in
/// the types implementing [`EvictionPolicy`].
///
/// # Variants
///
/// * `FIFO` - **First In, First Out**
///   - The oldest inserted entry is removed first
///   - Reads and updates never change the order
///
/// * `LRU` - **Least Recently Used**
///   - The entry that went longest without a read or update is removed first
///
/// * `LFU` - **Least Frequently Used** (default)
///   - The entry with the lowest access count is removed first
///   - Ties are broken by the oldest arrival into that frequency tier
///   - O(1) on hit, insert and eviction thanks to frequency buckets
///
/// * `Random` - **Random replacement**
///   - A uniformly random entry is removed
///
/// # Examples
///
/// ```
/// use bucketcache_core::PolicyKind;
///
/// let default_policy = PolicyKind::default();
/// assert_eq!(default_policy, PolicyKind::LFU);
///
/// let policy: PolicyKind = "lru".into();
/// assert_eq!(policy, PolicyKind::LRU);
/// ```
///
/// # Performance Characteristics
///
/// | Policy | Eviction | Cache Hit | Insert |
/// |--------|----------|-----------|--------|
/// | FIFO   | O(1)     | O(1)      | O(1)   |
/// | LRU    | O(1)     | O(1)      | O(1)   |
/// | LFU    | O(1)*    | O(1)      | O(1)   |
/// | Random | O(1)     | O(1)      | O(1)   |
///
/// \* LFU falls back to a scan over the distinct frequencies when an eviction
/// or removal empties the minimum bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    FIFO,
    LRU,
    #[default]
    LFU,
    Random,
}

impl PolicyKind {
    /// Lower-case name of the policy, as accepted by `From<&str>`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::FIFO => "fifo",
            PolicyKind::LRU => "lru",
            PolicyKind::LFU => "lfu",
            PolicyKind::Random => "random",
        }
    }
}

/// Converts a string slice to a `PolicyKind`.
///
/// The conversion is case-insensitive and falls back to LFU for unrecognized
/// values.
///
/// ```
/// use bucketcache_core::PolicyKind;
///
/// assert_eq!(PolicyKind::from("FIFO"), PolicyKind::FIFO);
/// assert_eq!(PolicyKind::from("random"), PolicyKind::Random);
/// assert_eq!(PolicyKind::from("clock"), PolicyKind::LFU);
/// ```
impl From<&str> for PolicyKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "fifo" => PolicyKind::FIFO,
            "lru" => PolicyKind::LRU,
            "random" => PolicyKind::Random,
            _ => PolicyKind::LFU,
        }
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Policy-specific bookkeeping behind a [`Cache`](crate::Cache).
///
/// The cache owns the lock, the capacity and the put/remove/clear protocol;
/// a policy owns every index and decides what "access" and "victim" mean.
/// Every method is called with the cache lock already held, so
/// implementations never synchronize on their own.
///
/// The cache only calls each mutating hook in the situation it documents:
///
/// * [`insert_entry`](EvictionPolicy::insert_entry) for an absent key, after
///   any eviction the capacity required
/// * [`update_value`](EvictionPolicy::update_value) for a present key
/// * [`remove_entry`](EvictionPolicy::remove_entry) for any key; absent keys
///   return `None` and change nothing
/// * [`evict`](EvictionPolicy::evict) when the cache is full and a new key is
///   about to be inserted; it removes exactly one entry
pub trait EvictionPolicy<K, V> {
    /// Which strategy this policy implements.
    fn kind(&self) -> PolicyKind;

    /// Looks up `key` and records the access.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Looks up `key` without recording an access.
    fn peek(&self, key: &K) -> Option<&V>;

    fn contains_key(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creates the entry for a key that is not present, in the policy's
    /// initial state.
    fn insert_entry(&mut self, key: K, value: V);

    /// Replaces the value of a present key and applies the policy's access
    /// semantics to it.
    fn update_value(&mut self, key: &K, value: V);

    /// Removes `key` from every index.
    fn remove_entry(&mut self, key: &K) -> Option<V>;

    /// Removes the policy's victim and returns it.
    fn evict(&mut self) -> Option<(K, V)>;

    /// Resets every index and derived value to the empty baseline.
    fn clear_entries(&mut self);
}
