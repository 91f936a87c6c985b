//! Process-wide response cache with per-entry TTL.
//!
//! Values are opaque JSON payloads; the services own the key scheme
//! (`products:page{N}:limit{M}`, `search:{query}`, `upi:current`). Expired
//! entries are evicted lazily on read. Alongside the TTL map the cache keeps
//! a dedicated snapshot of the last good first-page product payload, which
//! is what stale-on-error serves when the upstream fetch fails; that slot is
//! never subject to TTL and survives [`ResponseCache::invalidate_all`].

use std::{
    sync::{PoisonError, RwLock},
    time::{Duration, Instant},
};

use rustc_hash::FxHashMap;
use serde_json::Value;

/// TTL for cached product listing pages.
pub const PRODUCTS_TTL: Duration = Duration::from_secs(5 * 60);

/// TTL for cached search results.
pub const SEARCH_TTL: Duration = Duration::from_secs(2 * 60);

/// TTL for the cached UPI singleton.
pub const UPI_TTL: Duration = Duration::from_secs(60);

/// Interval between background refreshes of the warm first page.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

/// Key/value cache with per-entry expiry and a stale page-1 snapshot.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: RwLock<FxHashMap<String, CacheEntry>>,
    snapshot: RwLock<Option<Value>>,
}

impl ResponseCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache key for a product listing page.
    #[must_use]
    pub fn product_page_key(page: usize, limit: usize) -> String {
        format!("products:page{page}:limit{limit}")
    }

    /// Cache key for a search query (already lowercased by the caller).
    #[must_use]
    pub fn search_key(query: &str) -> String {
        format!("search:{query}")
    }

    /// Return the value stored under `key` if it has not expired. An
    /// expired entry is removed and reported absent.
    pub fn get(&self, key: &str) -> Option<Value> {
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);

            if let Some(entry) = entries.get(key) {
                if entry.expires_at > Instant::now() {
                    return Some(entry.value.clone());
                }
            } else {
                return None;
            }
        }

        // Expired: evict under the write lock.
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(entry) = entries.get(key) {
            if entry.expires_at > Instant::now() {
                return Some(entry.value.clone());
            }

            entries.remove(key);
        }

        None
    }

    /// Store `value` under `key`, unconditionally overwriting any existing
    /// entry.
    pub fn set(&self, key: &str, value: Value, ttl: Duration) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + ttl,
        };

        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), entry);
    }

    /// Remove the entry stored under `key`, if any.
    pub fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    /// Drop every TTL entry. The stale snapshot is retained; the landing
    /// page fallback tolerates staleness by contract.
    pub fn invalidate_all(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Replace the stale page-1 snapshot.
    pub fn store_snapshot(&self, value: Value) {
        *self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(value);
    }

    /// The last good page-1 payload, regardless of age.
    pub fn snapshot(&self) -> Option<Value> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
