//! Integration tests for the full summary pipeline
//!
//! Drives the real SQLite store through the cache, the wallet filter and
//! both summary builders, verifying the end-to-end flow a caller runs for
//! every query:
//!
//! - range-bounded fetch with NULL normalization
//! - wallet label filtering (empty selection passes through)
//! - per-coin pivot and per-wallet merge on the fetched rows

use std::collections::HashSet;
use std::time::Duration;

use rusqlite::{params, Connection};
use swaplens::store::{init_schema, CachedRecordStore, RecordStore, SqliteRecordStore};
use swaplens::summary_core::{
    build_coin_summary, build_wallet_summary, filter_by_wallets, Selection,
};
use tempfile::tempdir;

fn seed_db(conn: &Connection) {
    init_schema(conn).unwrap();

    let rows: [(i64, Option<&str>, Option<&str>, Option<&str>, Option<&str>, Option<f64>); 4] = [
        // The two-record scenario inside the query range.
        (1_000, Some("W1"), Some("whale-1"), Some("SOL"), Some("USDC"), Some(100.0)),
        (1_100, Some("W2"), Some("whale-2"), Some("USDC"), Some("SOL"), Some(50.0)),
        // Outside the range; must not influence the summaries.
        (5_000, Some("W3"), Some("whale-3"), Some("SOL"), Some("USDC"), Some(999.0)),
        // Inside the range but fully NULL apart from the timestamp.
        (1_200, None, None, None, None, None),
    ];

    for (ts, address, label, sold, received, usd) in rows {
        conn.execute(
            "INSERT INTO swaps (timestamp, wallet_address, wallet_label,
                                sold_currency, received_currency, value_usd)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![ts, address, label, sold, received, usd],
        )
        .unwrap();
    }
}

#[test]
fn test_fetch_filter_and_summarize() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("swaps.db");

    let conn = Connection::open(&db_path).unwrap();
    seed_db(&conn);
    drop(conn);

    let store = SqliteRecordStore::open(&db_path).unwrap();
    let mut store = CachedRecordStore::with_ttl(store, Duration::from_secs(3600));

    let mut selection = Selection::new();
    let range = selection.set_range(900, 2_000);

    let records = store.fetch_records(Some(range)).unwrap();
    assert_eq!(records.len(), 3); // the NULL row is in range too

    // Empty wallet selection passes everything through.
    let records = filter_by_wallets(records, selection.wallet_filter());
    assert_eq!(records.len(), 3);

    let coin_rows = build_coin_summary(&records);
    assert_eq!(coin_rows.len(), 2); // the NULL row has no valid leg

    let sol = coin_rows.iter().find(|r| r.coin == "SOL").unwrap();
    assert_eq!(sol.buy_wallets, 1);
    assert_eq!(sol.buy_volume, 50.0);
    assert_eq!(sol.sell_wallets, 1);
    assert_eq!(sol.sell_volume, 100.0);

    let selected: HashSet<String> = ["SOL".to_string()].into();
    let wallet_rows = build_wallet_summary(&records, &selected);
    assert_eq!(wallet_rows.len(), 2);

    assert_eq!(wallet_rows[0].wallet_address, "W1");
    assert_eq!(wallet_rows[0].unique_sell_transactions, 1);
    assert_eq!(wallet_rows[0].sell_volume, 100.0);
    assert_eq!(wallet_rows[0].unique_buy_transactions, 0);

    assert_eq!(wallet_rows[1].wallet_address, "W2");
    assert_eq!(wallet_rows[1].unique_buy_transactions, 1);
    assert_eq!(wallet_rows[1].buy_volume, 50.0);
    assert_eq!(
        wallet_rows[1].profile_link,
        "https://dexcheck.ai/app/wallet-analyzer/W2"
    );
}

#[test]
fn test_wallet_filter_narrows_summaries() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("swaps.db");

    let conn = Connection::open(&db_path).unwrap();
    seed_db(&conn);
    drop(conn);

    let store = SqliteRecordStore::open(&db_path).unwrap();
    let mut store = CachedRecordStore::with_ttl(store, Duration::from_secs(3600));

    let mut selection = Selection::new();
    // Inverted manual entry; the selection surface swaps the bounds.
    let range = selection.set_range(2_000, 900);
    assert_eq!((range.start, range.end), (900, 2_000));

    selection.set_wallet_filter(["whale-1".to_string()].into());

    let records = store.fetch_records(Some(range)).unwrap();
    let records = filter_by_wallets(records, selection.wallet_filter());
    assert_eq!(records.len(), 1);

    let coin_rows = build_coin_summary(&records);
    let usdc = coin_rows.iter().find(|r| r.coin == "USDC").unwrap();
    assert_eq!(usdc.buy_wallets, 1);
    assert_eq!(usdc.buy_volume, 100.0);
    assert_eq!(usdc.sell_wallets, 0);
    assert_eq!(usdc.sell_volume, 0.0);
}

#[test]
fn test_cached_fetch_reused_within_ttl() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("swaps.db");

    let conn = Connection::open(&db_path).unwrap();
    seed_db(&conn);

    let store = SqliteRecordStore::open(&db_path).unwrap();
    let mut store = CachedRecordStore::with_ttl(store, Duration::from_secs(3600));

    let mut selection = Selection::new();
    let range = selection.set_range(900, 2_000);

    let first = store.fetch_records(Some(range)).unwrap();

    // New rows landing after the first fetch are invisible until the
    // entry expires.
    conn.execute(
        "INSERT INTO swaps (timestamp, wallet_address, wallet_label,
                            sold_currency, received_currency, value_usd)
         VALUES (1500, 'W9', 'whale-9', 'SOL', 'USDC', 10.0)",
        [],
    )
    .unwrap();

    let second = store.fetch_records(Some(range)).unwrap();
    assert_eq!(first, second);
}
