//! Configuration from environment variables

use std::env;

/// Runtime configuration, loaded from environment variables with
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite swaps database
    pub db_path: String,

    /// Fetch cache freshness window in seconds
    pub cache_ttl_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `SWAPLENS_DB_PATH` (default: data/swaplens.db)
    /// - `FETCH_CACHE_TTL_SECS` (default: 300)
    pub fn from_env() -> Self {
        Self {
            db_path: env::var("SWAPLENS_DB_PATH")
                .unwrap_or_else(|_| "data/swaplens.db".to_string()),

            cache_ttl_secs: env::var("FETCH_CACHE_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(300),
        }
    }
}
