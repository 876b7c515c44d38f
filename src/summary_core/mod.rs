//! Summary Core - Transaction Aggregation Engine
//!
//! Converts a flat collection of swap records into the two derived views
//! served to the presentation layer: per-coin buy/sell activity and
//! per-wallet activity for a selected coin subset.
//!
//! # Architecture
//!
//! ```text
//! record store fetch (time range)
//!     ↓
//! filter_by_wallets (label subset; empty selection = pass-through)
//!     ↓
//! build_coin_summary ── one row per coin, four numeric columns
//! build_wallet_summary ── one row per wallet, selected coins only
//! ```
//!
//! Everything here operates on in-memory data and owns no state across
//! calls; re-running a builder on unchanged input yields identical output.

pub mod coin_summary;
pub mod record;
pub mod selection;
pub mod time_range;
pub mod wallet_filter;
pub mod wallet_summary;

pub use coin_summary::{build_coin_summary, CoinSummary};
pub use record::{SwapRecord, SwapSide};
pub use selection::Selection;
pub use time_range::{now_with_offset, RangePreset, TimeRange, TIME_OFFSET_SECS};
pub use wallet_filter::{distinct_wallet_labels, filter_by_wallets};
pub use wallet_summary::{build_wallet_summary, filter_by_coins, WalletSummary};
