//! Report Binary - Swap Activity Summaries
//!
//! Fetches swap records for a preset time range and prints the per-coin
//! summary; when coins are selected, also prints the per-wallet summary
//! and the matching detail rows.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin report -- 24h
//! ```
//!
//! The single positional argument is a range preset: 2h, 6h, 24h, 3d,
//! 7d, month, all (default: 2h).
//!
//! ## Environment Variables
//!
//! - SWAPLENS_DB_PATH - SQLite swaps database path (default: data/swaplens.db)
//! - FETCH_CACHE_TTL_SECS - Fetch cache freshness window (default: 300)
//! - SELECTED_COINS - Comma-separated coin symbols for the wallet summary
//! - SELECTED_WALLETS - Comma-separated wallet labels to filter on
//! - REPORT_JSON - Set to 1 to emit JSON instead of text tables
//! - RUST_LOG - Logging level (optional, default: info)

use std::collections::HashSet;
use std::env;
use std::time::Duration;

use swaplens::config::Config;
use swaplens::store::{CachedRecordStore, RecordStore, SqliteRecordStore};
use swaplens::summary_core::{
    build_coin_summary, build_wallet_summary, distinct_wallet_labels, filter_by_coins,
    filter_by_wallets, CoinSummary, RangePreset, Selection, SwapRecord, WalletSummary,
};

fn parse_env_set(var: &str) -> HashSet<String> {
    env::var(var)
        .map(|s| {
            s.split(',')
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn print_coin_table(rows: &[CoinSummary]) {
    println!();
    println!("Coin summary ({} coins)", rows.len());
    println!(
        "{:<14} {:>12} {:>12} {:>16} {:>16}",
        "coin", "buy_wallets", "sell_wallets", "buy_volume", "sell_volume"
    );
    for row in rows {
        println!(
            "{:<14} {:>12} {:>12} {:>16.2} {:>16.2}",
            row.coin, row.buy_wallets, row.sell_wallets, row.buy_volume, row.sell_volume
        );
    }
}

fn print_wallet_table(rows: &[WalletSummary]) {
    println!();
    println!("Wallet summary ({} wallets)", rows.len());
    println!(
        "{:<46} {:>10} {:>14} {:>10} {:>14}  {}",
        "wallet", "buys", "buy_volume", "sells", "sell_volume", "link"
    );
    for row in rows {
        println!(
            "{:<46} {:>10} {:>14.2} {:>10} {:>14.2}  {}",
            row.wallet_address,
            row.unique_buy_transactions,
            row.buy_volume,
            row.unique_sell_transactions,
            row.sell_volume,
            row.profile_link
        );
    }
}

fn print_detail_table(records: &[SwapRecord]) {
    println!();
    println!("Detail rows ({} records)", records.len());
    for record in records {
        println!(
            "{} {:<46} {:<14} -> {:<14} {:>14.2}",
            record.timestamp,
            record.wallet_address,
            record.sold_currency,
            record.received_currency,
            record.value_usd
        );
    }
}

fn main() {
    dotenv::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::from_env();

    let preset = env::args()
        .nth(1)
        .and_then(|s| RangePreset::from_str(&s))
        .unwrap_or(RangePreset::Last2Hours);

    let mut selection = Selection::new();
    let range = selection.apply_preset(preset);
    selection.set_wallet_filter(parse_env_set("SELECTED_WALLETS"));

    log::info!("🚀 Starting swap report");
    log::info!("   DB: {}", config.db_path);
    log::info!(
        "   Range: {} ({} → {})",
        preset.as_str(),
        range.start,
        range.end
    );

    let store = match SqliteRecordStore::open(&config.db_path) {
        Ok(store) => store,
        Err(e) => {
            log::error!("❌ Failed to open record store: {}", e);
            std::process::exit(1);
        }
    };
    let mut store =
        CachedRecordStore::with_ttl(store, Duration::from_secs(config.cache_ttl_secs));

    // A failed fetch degrades to an empty record set; the summaries keep
    // their shape either way.
    let records = store.fetch_records(Some(range)).unwrap_or_else(|e| {
        log::error!("❌ Fetch failed: {}", e);
        Vec::new()
    });
    log::info!("📥 {} records in range", records.len());

    if selection.wallet_filter().is_empty() {
        let labels = distinct_wallet_labels(&records);
        if !labels.is_empty() {
            log::info!("   Known wallet labels: {}", labels.join(", "));
        }
    }

    let records = filter_by_wallets(records, selection.wallet_filter());

    let selected_coins = parse_env_set("SELECTED_COINS");
    let coin_rows = build_coin_summary(&records);
    let wallet_rows = build_wallet_summary(&records, &selected_coins);
    let detail_rows = filter_by_coins(&records, &selected_coins);

    let as_json = env::var("REPORT_JSON").map(|v| v == "1").unwrap_or(false);

    if as_json {
        let report = serde_json::json!({
            "range": { "preset": preset.as_str(), "start": range.start, "end": range.end },
            "coins": coin_rows,
            "wallets": wallet_rows,
            "details": detail_rows,
        });
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{}", out),
            Err(e) => log::error!("❌ Failed to encode report: {}", e),
        }
        return;
    }

    print_coin_table(&coin_rows);

    if selected_coins.is_empty() {
        log::info!("No coins selected; set SELECTED_COINS for the wallet summary");
    } else {
        print_wallet_table(&wallet_rows);
        print_detail_table(&detail_rows);
    }
}
