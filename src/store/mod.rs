//! Record store - fetch and normalization boundary
//!
//! The only I/O in the crate. Rows leave this layer with string fields
//! normalized to `""` and absent USD values to 0, so the aggregation side
//! never sees nulls. A fetch failure surfaces as [`StoreError`]; callers
//! degrade to an empty record set, which every builder treats as valid
//! input producing an empty, correctly-shaped result.

pub mod cache;
pub mod sqlite;

pub use cache::{CachedRecordStore, DEFAULT_CACHE_TTL};
pub use sqlite::{init_schema, SqliteRecordStore};

use crate::summary_core::record::SwapRecord;
use crate::summary_core::time_range::TimeRange;

#[derive(Debug)]
pub enum StoreError {
    Database(rusqlite::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database(err)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Database(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// Source of raw swap records for a time window.
pub trait RecordStore {
    /// Fetch records with `timestamp` inside `range` (bounds inclusive),
    /// newest first; `None` fetches everything.
    fn fetch_records(&mut self, range: Option<TimeRange>) -> Result<Vec<SwapRecord>, StoreError>;
}
