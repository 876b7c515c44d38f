//! Wallet label filtering

use super::record::SwapRecord;
use std::collections::{BTreeSet, HashSet};

/// Restrict records to wallets whose label is selected.
///
/// An empty selection means "no filter" and passes every record through —
/// the opposite default of the selected-coin set in
/// [`build_wallet_summary`], where an empty set yields an empty result.
///
/// [`build_wallet_summary`]: super::wallet_summary::build_wallet_summary
pub fn filter_by_wallets(
    records: Vec<SwapRecord>,
    selected_labels: &HashSet<String>,
) -> Vec<SwapRecord> {
    if selected_labels.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|r| selected_labels.contains(&r.wallet_label))
        .collect()
}

/// Sorted distinct non-empty wallet labels present in `records`.
///
/// Feeds the caller's wallet picker; unlabeled records are omitted.
pub fn distinct_wallet_labels(records: &[SwapRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|r| !r.wallet_label.is_empty())
        .map(|r| r.wallet_label.clone())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str) -> SwapRecord {
        SwapRecord {
            timestamp: 1000,
            wallet_address: format!("addr-{}", label),
            wallet_label: label.to_string(),
            sold_currency: "SOL".to_string(),
            received_currency: "USDC".to_string(),
            value_usd: 1.0,
        }
    }

    #[test]
    fn test_empty_selection_passes_through() {
        let records = vec![record("alpha"), record("beta"), record("")];

        let filtered = filter_by_wallets(records.clone(), &HashSet::new());
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_filters_to_selected_labels() {
        let records = vec![record("alpha"), record("beta"), record("gamma")];
        let selected: HashSet<String> = ["alpha".to_string(), "gamma".to_string()].into();

        let filtered = filter_by_wallets(records, &selected);
        let labels: Vec<&str> = filtered.iter().map(|r| r.wallet_label.as_str()).collect();
        assert_eq!(labels, vec!["alpha", "gamma"]);
    }

    #[test]
    fn test_unmatched_selection_filters_to_nothing() {
        let records = vec![record("alpha")];
        let selected: HashSet<String> = ["nobody".to_string()].into();

        assert!(filter_by_wallets(records, &selected).is_empty());
    }

    #[test]
    fn test_distinct_labels_sorted_and_non_empty() {
        let records = vec![
            record("gamma"),
            record("alpha"),
            record("gamma"),
            record(""),
            record("beta"),
        ];

        assert_eq!(
            distinct_wallet_labels(&records),
            vec!["alpha", "beta", "gamma"]
        );
    }
}
