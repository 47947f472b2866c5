use thiserror::Error;

/// Errors surfaced by cache construction and the content hashing helpers.
///
/// Runtime cache operations never fail: a missing key is reported through
/// `Option`, not through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// A cache was configured with a capacity of zero.
    #[error("cache capacity must be greater than zero (got {0})")]
    InvalidCapacity(usize),

    /// A hashing algorithm name did not match any supported algorithm.
    #[error("unknown hashing algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CacheError>;
