//! SQLite-backed record store
//!
//! Reads the `swaps` table in read-only mode. NULL columns are normalized
//! before rows leave this module.

use super::{RecordStore, StoreError};
use crate::summary_core::record::SwapRecord;
use crate::summary_core::time_range::TimeRange;
use rusqlite::Connection;
use std::path::Path;

/// Read-only view over the `swaps` table.
pub struct SqliteRecordStore {
    conn: Connection,
}

impl SqliteRecordStore {
    /// Open the store; the connection rejects writes from then on.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(db_path)?;
        conn.execute("PRAGMA query_only = ON", [])?;

        log::info!("📥 Record store opened read-only");

        Ok(Self { conn })
    }
}

impl RecordStore for SqliteRecordStore {
    fn fetch_records(&mut self, range: Option<TimeRange>) -> Result<Vec<SwapRecord>, StoreError> {
        let records = match range {
            Some(range) => {
                let mut stmt = self.conn.prepare(
                    "SELECT timestamp, wallet_address, wallet_label,
                            sold_currency, received_currency, value_usd
                     FROM swaps
                     WHERE timestamp BETWEEN ?1 AND ?2
                     ORDER BY timestamp DESC",
                )?;
                let rows = stmt.query_map([range.start, range.end], read_record)?;
                collect_records(rows)?
            }
            None => {
                let mut stmt = self.conn.prepare(
                    "SELECT timestamp, wallet_address, wallet_label,
                            sold_currency, received_currency, value_usd
                     FROM swaps
                     ORDER BY timestamp DESC",
                )?;
                let rows = stmt.query_map([], read_record)?;
                collect_records(rows)?
            }
        };

        log::debug!("📥 Fetched {} swap records", records.len());

        Ok(records)
    }
}

/// Collect mapped rows, dropping the ones whose columns hold the wrong
/// type (a non-numeric volume, a text timestamp). Other database errors
/// still abort the fetch.
fn collect_records<I>(rows: I) -> Result<Vec<SwapRecord>, StoreError>
where
    I: Iterator<Item = rusqlite::Result<SwapRecord>>,
{
    let mut records = Vec::new();

    for row in rows {
        match row {
            Ok(record) => records.push(record),
            Err(rusqlite::Error::InvalidColumnType(index, name, _)) => {
                log::debug!("Skipping malformed swap row: column {} ({})", index, name);
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(records)
}

fn read_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<SwapRecord> {
    Ok(SwapRecord {
        timestamp: row.get(0)?,
        wallet_address: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        wallet_label: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        sold_currency: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        received_currency: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        value_usd: row.get::<_, Option<f64>>(5)?.unwrap_or(0.0),
    })
}

/// Create the `swaps` table and its timestamp index if missing.
///
/// Idempotent; used by ingest tooling and test fixtures.
pub fn init_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS swaps (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp INTEGER NOT NULL,
            wallet_address TEXT,
            wallet_label TEXT,
            sold_currency TEXT,
            received_currency TEXT,
            value_usd REAL
        );
        CREATE INDEX IF NOT EXISTS idx_swaps_timestamp ON swaps (timestamp);",
    )?;

    Ok(())
}
