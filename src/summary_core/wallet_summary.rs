//! Per-wallet activity for a selected coin subset

use super::record::SwapRecord;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Wallet analyzer deep-link base.
const WALLET_ANALYZER_BASE: &str = "https://dexcheck.ai/app/wallet-analyzer";

/// One output row per wallet address that touched a selected coin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletSummary {
    pub wallet_address: String,
    pub unique_buy_transactions: usize,
    pub buy_volume: f64,
    pub unique_sell_transactions: usize,
    pub sell_volume: f64,
    pub profile_link: String,
}

#[derive(Default)]
struct WalletAccum {
    buy_count: usize,
    buy_volume: f64,
    sell_count: usize,
    sell_volume: f64,
}

/// Records touching any selected coin on either leg.
///
/// This is the detail view shown under the wallet summary; the summary
/// itself re-checks each leg, so the two stay consistent by construction.
pub fn filter_by_coins(records: &[SwapRecord], selected_coins: &HashSet<String>) -> Vec<SwapRecord> {
    records
        .iter()
        .filter(|r| {
            selected_coins.contains(&r.sold_currency)
                || selected_coins.contains(&r.received_currency)
        })
        .cloned()
        .collect()
}

/// Aggregate per-wallet activity over the selected coin set.
///
/// A record lands in the buy partition when its received leg is selected
/// and in the sell partition when its sold leg is selected — possibly
/// both. Wallets present on only one side report 0 for the other. An
/// empty selected set yields an empty result; this is the opposite
/// default of [`filter_by_wallets`], where an empty selection passes
/// everything through. Rows come back sorted by wallet address ascending.
///
/// [`filter_by_wallets`]: super::wallet_filter::filter_by_wallets
pub fn build_wallet_summary(
    records: &[SwapRecord],
    selected_coins: &HashSet<String>,
) -> Vec<WalletSummary> {
    if selected_coins.is_empty() {
        return Vec::new();
    }

    let mut by_wallet: HashMap<String, WalletAccum> = HashMap::new();

    for record in records {
        if selected_coins.contains(&record.received_currency) {
            let accum = by_wallet.entry(record.wallet_address.clone()).or_default();
            accum.buy_count += 1;
            accum.buy_volume += record.value_usd;
        }
        if selected_coins.contains(&record.sold_currency) {
            let accum = by_wallet.entry(record.wallet_address.clone()).or_default();
            accum.sell_count += 1;
            accum.sell_volume += record.value_usd;
        }
    }

    let mut rows: Vec<WalletSummary> = by_wallet
        .into_iter()
        .map(|(wallet_address, accum)| WalletSummary {
            profile_link: profile_link(&wallet_address),
            wallet_address,
            unique_buy_transactions: accum.buy_count,
            buy_volume: accum.buy_volume,
            unique_sell_transactions: accum.sell_count,
            sell_volume: accum.sell_volume,
        })
        .collect();

    rows.sort_by(|a, b| a.wallet_address.cmp(&b.wallet_address));

    rows
}

/// Deep link to the wallet analyzer; an empty address yields an empty
/// link, never a malformed URL.
fn profile_link(wallet_address: &str) -> String {
    if wallet_address.is_empty() {
        String::new()
    } else {
        format!("{}/{}", WALLET_ANALYZER_BASE, wallet_address)
    }
}
