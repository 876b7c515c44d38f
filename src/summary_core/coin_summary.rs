//! Per-coin buy/sell activity pivot

use super::record::{SwapRecord, SwapSide};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// One output row per distinct coin symbol.
///
/// The four numeric columns always exist; a side with no observations
/// reports 0 rather than dropping the row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinSummary {
    pub coin: String,
    pub buy_wallets: usize,
    pub sell_wallets: usize,
    pub buy_volume: f64,
    pub sell_volume: f64,
}

#[derive(Default)]
struct CoinAccum {
    buy_wallets: HashSet<String>,
    sell_wallets: HashSet<String>,
    buy_volume: f64,
    sell_volume: f64,
}

/// Aggregate records into one row per coin.
///
/// Each record contributes a buy observation for its received leg and a
/// sell observation for its sold leg, both sized by the record's USD
/// value; legs with an empty symbol contribute nothing. Wallets are
/// counted distinct by label (an empty label counts as one wallet).
/// Rows come back sorted by `buy_wallets` descending, ties by coin
/// symbol ascending.
pub fn build_coin_summary(records: &[SwapRecord]) -> Vec<CoinSummary> {
    let mut by_coin: HashMap<String, CoinAccum> = HashMap::new();

    for record in records {
        for (side, coin) in record.legs() {
            if coin.is_empty() {
                continue;
            }

            let accum = by_coin.entry(coin.to_string()).or_default();
            match side {
                SwapSide::Buy => {
                    accum.buy_wallets.insert(record.wallet_label.clone());
                    accum.buy_volume += record.value_usd;
                }
                SwapSide::Sell => {
                    accum.sell_wallets.insert(record.wallet_label.clone());
                    accum.sell_volume += record.value_usd;
                }
            }
        }
    }

    let mut rows: Vec<CoinSummary> = by_coin
        .into_iter()
        .map(|(coin, accum)| CoinSummary {
            coin,
            buy_wallets: accum.buy_wallets.len(),
            sell_wallets: accum.sell_wallets.len(),
            buy_volume: accum.buy_volume,
            sell_volume: accum.sell_volume,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.buy_wallets
            .cmp(&a.buy_wallets)
            .then_with(|| a.coin.cmp(&b.coin))
    });

    rows
}
