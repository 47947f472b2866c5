//! Content digests for keying a cache by the bytes of a payload.
//!
//! Nothing in the cache depends on this module; it is for callers that want
//! "same content, same entry" semantics without keeping the payload itself
//! as the key. The digest algorithms come from the `sha2` crate.
//!
//! ```
//! use bucketcache_core::hashing::{ContentKey, HashAlgorithm};
//! use bucketcache_core::Cache;
//!
//! let cache = Cache::new(8).unwrap();
//! let key = ContentKey::of(HashAlgorithm::Sha256, b"rendered page");
//! cache.put(key.clone(), 1024usize);
//!
//! let same = ContentKey::of(HashAlgorithm::Sha256, b"rendered page");
//! assert_eq!(cache.get(&same), Some(1024));
//! ```

use crate::error::{CacheError, Result};
use sha2::{Digest, Sha256, Sha512};
use std::fmt;
use std::str::FromStr;

/// Digest algorithms a [`ContentKey`] can be built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Canonical name, accepted back by `FromStr`.
    pub const fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// Length of the digest in bytes.
    pub const fn output_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
        }
    }

    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        }
    }

    /// Digest of `salt` followed by `data`.
    pub fn digest_salted(&self, data: &[u8], salt: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha256 => salted::<Sha256>(data, salt),
            HashAlgorithm::Sha512 => salted::<Sha512>(data, salt),
        }
    }
}

fn salted<D: Digest>(data: &[u8], salt: &[u8]) -> Vec<u8> {
    let mut hasher = D::new();
    hasher.update(salt);
    hasher.update(data);
    hasher.finalize().to_vec()
}

impl FromStr for HashAlgorithm {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(CacheError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cache key made from the digest of some content.
///
/// Two keys are equal when they were produced by the same algorithm over the
/// same bytes (and salt). `Display` renders the digest as lower-case hex.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentKey {
    algorithm: HashAlgorithm,
    digest: Vec<u8>,
}

impl ContentKey {
    pub fn of(algorithm: HashAlgorithm, data: &[u8]) -> Self {
        Self {
            algorithm,
            digest: algorithm.digest(data),
        }
    }

    pub fn salted(algorithm: HashAlgorithm, data: &[u8], salt: &[u8]) -> Self {
        Self {
            algorithm,
            digest: algorithm.digest_salted(data, salt),
        }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.digest
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.digest))
    }
}
