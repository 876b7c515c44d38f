//! # SwapLens
//!
//! Aggregation engine for raw on-chain swap records. Turns a flat,
//! append-only table of buy/sell swap events into two derived views:
//! per-coin activity (distinct wallets and volume on each side) and
//! per-wallet activity restricted to a chosen coin subset, bounded by a
//! caller-supplied time window and wallet filter.
//!
//! # Architecture
//!
//! ```text
//! SQLite swaps table → SqliteRecordStore → CachedRecordStore (5 min TTL)
//!     ↓
//! filter_by_wallets (label subset; empty selection = pass-through)
//!     ↓
//! build_coin_summary (coin × side pivot)
//! build_wallet_summary (selected coins, analyzer profile links)
//! ```
//!
//! Every aggregation call is a pure, synchronous, in-memory transformation;
//! the record store is the only component that performs I/O.

pub mod config;
pub mod store;
pub mod summary_core;
