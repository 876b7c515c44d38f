//! Swap record type and JSONL parsing

use serde::{Deserialize, Serialize};
use std::error::Error;

/// One observed swap: a sold leg and a received leg, both sized by the
/// same USD value.
///
/// String fields are never null — the ingest boundary normalizes absent
/// values to empty strings, and an absent USD size to 0. A record with
/// both coin symbols empty is malformed and contributes nothing to any
/// summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRecord {
    pub timestamp: i64,
    #[serde(default)]
    pub wallet_address: String,
    #[serde(default)]
    pub wallet_label: String,
    #[serde(default)]
    pub sold_currency: String,
    #[serde(default)]
    pub received_currency: String,
    #[serde(default)]
    pub value_usd: f64,
}

/// Side of a swap leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapSide {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
}

impl SwapRecord {
    /// Parse a SwapRecord from a JSONL line
    pub fn from_jsonl(line: &str) -> Result<Self, Box<dyn Error>> {
        let record: SwapRecord = serde_json::from_str(line)?;
        Ok(record)
    }

    /// The two legs of the swap, buy leg first.
    ///
    /// An empty symbol marks a malformed leg; consumers skip those.
    pub fn legs(&self) -> [(SwapSide, &str); 2] {
        [
            (SwapSide::Buy, self.received_currency.as_str()),
            (SwapSide::Sell, self.sold_currency.as_str()),
        ]
    }
}
