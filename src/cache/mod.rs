//! In-memory read-through caches with single-flight population.
//!
//! # Responsibilities
//! - Memoize upstream results for the lifetime of the process
//! - Coalesce concurrent first access to one key into a single fetch
//! - Guarantee a key is written at most once; failures never populate
//!
//! # Design Decisions
//! - Per-key state lives in a `tokio::sync::OnceCell`: Absent (empty cell),
//!   Populating (an initializer holds the cell's init permit), Populated
//!   (terminal). There is no Failed state; a failed initializer leaves the
//!   cell empty and the next caller re-attempts the fetch.
//! - The DashMap shard lock is only held while cloning out the cell handle;
//!   the fetch itself runs outside any map lock, so slow fetches for one
//!   key never serialize access to other keys.
//! - Entries are never evicted; process lifetime is cache lifetime.

use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::OnceCell;

use crate::error::ServiceResult;
use crate::observability::metrics;

/// A thread-safe memoizing cache keyed by strings.
///
/// Cloning the cache is cheap and shares the underlying map.
#[derive(Clone)]
pub struct SingleFlightCache<V> {
    entries: Arc<DashMap<String, Arc<OnceCell<V>>>>,
    /// Label used on cache metrics.
    name: &'static str,
}

impl<V: Clone> SingleFlightCache<V> {
    /// Create a new empty cache. `name` labels this cache in metrics.
    pub fn new(name: &'static str) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            name,
        }
    }

    /// Look up `key` without fetching.
    pub fn peek(&self, key: &str) -> Option<V> {
        self.entries
            .get(key)
            .and_then(|cell| cell.get().cloned())
    }

    /// Number of keys with a populated or in-flight entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-through lookup.
    ///
    /// On a miss, `fetch` runs to populate the key; concurrent callers for
    /// the same key await that one fetch instead of issuing their own. A
    /// fetch error is returned to the caller and leaves the key absent, so
    /// a later call retries. Once a key is populated every subsequent call
    /// returns the stored value without invoking `fetch`.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> ServiceResult<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ServiceResult<V>>,
    {
        let cell = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone();

        if let Some(value) = cell.get() {
            metrics::record_cache_access(self.name, "hit");
            return Ok(value.clone());
        }
        metrics::record_cache_access(self.name, "miss");

        let value = cell.get_or_try_init(fetch).await?;
        Ok(value.clone())
    }
}

impl<V: Clone> std::fmt::Debug for SingleFlightCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SingleFlightCache")
            .field("name", &self.name)
            .field("entries", &self.entries.len())
            .finish()
    }
}
