//! Caching layer for the raw dataset.
//!
//! Re-reading and re-parsing the dataset for every search is wasteful when
//! the data changes rarely. `CachedSource` wraps any [`DatasetSource`] and
//! keeps the parsed dataset for a bounded time. Callers that know the data
//! changed can drop it early with [`CachedSource::invalidate`].

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache as MokaCache;
use tracing::{debug, trace};

use crate::dataset::{DatasetError, DatasetSource, RawDataset};

/// There is only ever one dataset per source.
type DatasetKey = ();

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for the cached dataset.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl CacheConfig {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            ..Self::default()
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(5 * 60),
            max_capacity: 16,
        }
    }
}

/// Dataset source with caching.
///
/// Wraps a `DatasetSource` and serves the last loaded dataset until it
/// expires or is invalidated. Load errors are never cached.
pub struct CachedSource<S> {
    inner: S,
    cache: MokaCache<DatasetKey, Arc<RawDataset>>,
}

impl<S: DatasetSource> CachedSource<S> {
    /// Create a new cached source.
    pub fn new(inner: S, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, cache }
    }

    /// Access the underlying source for loads that bypass the cache.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns true if a dataset is currently cached.
    pub fn is_cached(&self) -> bool {
        self.cache.contains_key(&())
    }

    /// Drop the cached dataset so the next load reads the source again.
    pub fn invalidate(&self) {
        debug!("Invalidating cached dataset");
        self.cache.invalidate(&());
    }
}

impl<S: DatasetSource> DatasetSource for CachedSource<S> {
    fn load(&self) -> Result<Arc<RawDataset>, DatasetError> {
        if let Some(cached) = self.cache.get(&()) {
            trace!("Dataset cache hit");
            return Ok(cached);
        }

        trace!("Dataset cache miss");
        let dataset = self.inner.load()?;
        self.cache.insert((), Arc::clone(&dataset));

        Ok(dataset)
    }
}
