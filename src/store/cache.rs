//! Time-bounded memoization of record fetches

use super::{RecordStore, StoreError};
use crate::summary_core::record::SwapRecord;
use crate::summary_core::time_range::TimeRange;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default freshness window for cached fetches.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

struct CacheEntry {
    fetched_at: Instant,
    records: Vec<SwapRecord>,
}

/// Wraps a store and reuses fetch results per resolved range for `ttl`.
///
/// Entries expire by elapsed wall-clock time only; there is no explicit
/// invalidation. Expired entries are pruned on the next fetch. Errors
/// are never cached.
pub struct CachedRecordStore<S> {
    inner: S,
    ttl: Duration,
    entries: HashMap<Option<TimeRange>, CacheEntry>,
}

impl<S: RecordStore> CachedRecordStore<S> {
    pub fn new(inner: S) -> Self {
        Self::with_ttl(inner, DEFAULT_CACHE_TTL)
    }

    pub fn with_ttl(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: HashMap::new(),
        }
    }
}

impl<S: RecordStore> RecordStore for CachedRecordStore<S> {
    fn fetch_records(&mut self, range: Option<TimeRange>) -> Result<Vec<SwapRecord>, StoreError> {
        self.entries
            .retain(|_, entry| entry.fetched_at.elapsed() < self.ttl);

        if let Some(entry) = self.entries.get(&range) {
            log::debug!("📦 Cache hit for {:?}", range);
            return Ok(entry.records.clone());
        }

        let records = self.inner.fetch_records(range)?;
        self.entries.insert(
            range,
            CacheEntry {
                fetched_at: Instant::now(),
                records: records.clone(),
            },
        );

        Ok(records)
    }
}
