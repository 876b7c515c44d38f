//! Caller-owned selection state

use super::time_range::{RangePreset, TimeRange};
use std::collections::HashSet;

/// The active query selection: current time range plus wallet filter.
///
/// Owned by the presentation layer and passed into queries explicitly —
/// not a hidden global. One writer per interactive session, so replacing
/// the whole value is the only discipline needed.
#[derive(Debug, Clone)]
pub struct Selection {
    range: TimeRange,
    wallet_filter: HashSet<String>,
}

impl Selection {
    /// Starts on the last-2-hours preset with no wallet filter.
    pub fn new() -> Self {
        Self {
            range: RangePreset::Last2Hours.resolve(),
            wallet_filter: HashSet::new(),
        }
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn wallet_filter(&self) -> &HashSet<String> {
        &self.wallet_filter
    }

    /// Resolve `preset` and make it the active range.
    pub fn apply_preset(&mut self, preset: RangePreset) -> TimeRange {
        self.range = preset.resolve();
        self.range
    }

    /// Set an explicit range; inverted bounds are swapped.
    pub fn set_range(&mut self, start: i64, end: i64) -> TimeRange {
        self.range = if start > end {
            TimeRange::new(end, start)
        } else {
            TimeRange::new(start, end)
        };
        self.range
    }

    /// Replace the wallet filter with a new set of labels.
    pub fn set_wallet_filter(&mut self, labels: HashSet<String>) {
        self.wallet_filter = labels;
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}
