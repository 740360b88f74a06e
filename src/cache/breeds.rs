//! Memoizing decorator over any [`BreedProvider`].

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use moka::sync::Cache;
use tracing::{debug, warn};

use crate::providers::BreedProvider;
use crate::telemetry;
use crate::{BreedFetchError, Result};

/// Caches successful sub-breed lookups of a wrapped provider.
///
/// Keys are lowercased breed names, so lookups are case-insensitive. The
/// wrapped provider still receives the breed exactly as the caller wrote it.
///
/// - A hit returns the stored list and leaves [`calls_made`](Self::calls_made)
///   untouched.
/// - A miss increments `calls_made` once, then delegates. Successes
///   (including empty lists) are stored; failures are returned unchanged
///   and never stored, so a later call retries.
///
/// The cache has no capacity bound and no expiry: entries live as long as
/// the decorator. Concurrent misses on the same breed are not coalesced;
/// each one counts and delegates.
pub struct CachingBreedProvider {
    inner: Arc<dyn BreedProvider>,
    entries: Cache<String, Vec<String>>,
    calls_made: AtomicU64,
}

impl CachingBreedProvider {
    /// Wrap `inner` with an empty cache and a zero call counter.
    pub fn new(inner: Arc<dyn BreedProvider>) -> Self {
        Self {
            inner,
            entries: Cache::builder().build(),
            calls_made: AtomicU64::new(0),
        }
    }

    /// Wrap an owned provider.
    pub fn from_provider(inner: impl BreedProvider + 'static) -> Self {
        Self::new(Arc::new(inner))
    }

    /// Sub-breeds of `breed`, served from cache when possible.
    pub async fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        let key = cache_key(breed);
        let provider = self.inner.name();

        if let Some(cached) = self.entries.get(&key) {
            metrics::counter!(telemetry::CACHE_HITS_TOTAL, "provider" => provider.to_owned())
                .increment(1);
            debug!(breed, provider, "sub-breed cache hit");
            return Ok(cached);
        }

        metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "provider" => provider.to_owned())
            .increment(1);
        let calls = self.calls_made.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(breed, provider, calls, "sub-breed cache miss");

        match self.inner.sub_breeds(breed).await {
            Ok(sub_breeds) => {
                self.entries.insert(key, sub_breeds.clone());
                Ok(sub_breeds)
            }
            Err(e @ BreedFetchError::BreedNotFound(_)) => {
                debug!(breed, provider, "breed not found, not caching");
                Err(e)
            }
            Err(e) => {
                warn!(breed, provider, error = %e, "unexpected provider error, not caching");
                Err(e)
            }
        }
    }

    /// Number of lookups delegated to the wrapped provider so far.
    pub fn calls_made(&self) -> u64 {
        self.calls_made.load(Ordering::Relaxed)
    }

    /// Whether a successful lookup for `breed` is cached.
    pub fn is_cached(&self, breed: &str) -> bool {
        self.entries.contains_key(&cache_key(breed))
    }

    /// Number of cached breeds.
    pub fn len(&self) -> usize {
        self.entries.run_pending_tasks();
        self.entries.entry_count() as usize
    }

    /// Whether nothing is cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &Arc<dyn BreedProvider> {
        &self.inner
    }
}

#[async_trait]
impl BreedProvider for CachingBreedProvider {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        CachingBreedProvider::sub_breeds(self, breed).await
    }
}

fn cache_key(breed: &str) -> String {
    breed.to_lowercase()
}
