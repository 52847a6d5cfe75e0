//! On-disk cache store.
//!
//! One content-addressed key-value store over two namespaces: region
//! listings as human-readable JSON, resolved regions as bincode. Keys
//! are normalized (trimmed, lowercased) before touching the
//! filesystem, so "Michigan" and "michigan " address the same record.
//! A record on disk is trusted unconditionally — no freshness check,
//! no TTL, no invalidation API; deletion is an out-of-band filesystem
//! operation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CacheError, CacheResult};

/// Which record family a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// Region listings, `<root>/<key>.json`
    Listing,
    /// Resolved regions, `<root>/<key>.bin`
    Resolved,
}

impl Namespace {
    fn extension(self) -> &'static str {
        match self {
            Namespace::Listing => "json",
            Namespace::Resolved => "bin",
        }
    }
}

/// Normalize a free-text region name into a cache key.
///
/// Part of the store's key contract: lookups and writes agree on the
/// same record regardless of how the user cased the region name.
pub fn cache_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Filesystem-backed store for both cache namespaces.
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> CacheResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The directory holding every record.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, ns: Namespace, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", cache_key(key), ns.extension()))
    }

    /// Whether a record exists for `key` in `ns`.
    pub fn exists(&self, ns: Namespace, key: &str) -> bool {
        self.record_path(ns, key).exists()
    }

    /// Read a record. Fails with [`CacheError::Missing`] when absent.
    pub fn read<T: DeserializeOwned>(&self, ns: Namespace, key: &str) -> CacheResult<T> {
        let path = self.record_path(ns, key);
        if !path.exists() {
            return Err(CacheError::Missing {
                key: cache_key(key),
            });
        }

        let bytes = fs::read(&path)?;
        let value = match ns {
            Namespace::Listing => serde_json::from_slice(&bytes)?,
            Namespace::Resolved => bincode::deserialize(&bytes)?,
        };
        Ok(value)
    }

    /// Write a record, overwriting any previous one.
    ///
    /// Writes are not atomic; a crash mid-write can corrupt the record.
    pub fn write<T: Serialize>(&self, ns: Namespace, key: &str, value: &T) -> CacheResult<()> {
        let bytes = match ns {
            Namespace::Listing => serde_json::to_vec(value)?,
            Namespace::Resolved => bincode::serialize(value)?,
        };
        fs::write(self.record_path(ns, key), bytes)?;
        Ok(())
    }
}
