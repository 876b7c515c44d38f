//! Time range presets resolved against offset-adjusted current time

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Uniform shift applied to "now": the upstream feed records timestamps
/// in a UTC+3 zone.
pub const TIME_OFFSET_SECS: i64 = 3 * 3600;

/// Floor for the all-time preset: 2000-01-01T00:00:00Z.
const ALL_TIME_START: i64 = 946_684_800;

/// Inclusive pair of unix-second timestamps bounding a query.
///
/// Ordering is not enforced by the type. Presets always produce ordered
/// ranges; manual input is normalized by [`Selection::set_range`], and a
/// range built directly is passed through as given.
///
/// [`Selection::set_range`]: super::selection::Selection::set_range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}

impl TimeRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Whether `ts` falls within the range, bounds included.
    pub fn contains(&self, ts: i64) -> bool {
        ts >= self.start && ts <= self.end
    }
}

/// Named shorthand for a concrete time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangePreset {
    Last2Hours,
    Last6Hours,
    Last24Hours,
    Last3Days,
    Last7Days,
    CurrentMonth,
    AllTime,
}

impl RangePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangePreset::Last2Hours => "2h",
            RangePreset::Last6Hours => "6h",
            RangePreset::Last24Hours => "24h",
            RangePreset::Last3Days => "3d",
            RangePreset::Last7Days => "7d",
            RangePreset::CurrentMonth => "month",
            RangePreset::AllTime => "all",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "2h" => Some(RangePreset::Last2Hours),
            "6h" => Some(RangePreset::Last6Hours),
            "24h" => Some(RangePreset::Last24Hours),
            "3d" => Some(RangePreset::Last3Days),
            "7d" => Some(RangePreset::Last7Days),
            "month" => Some(RangePreset::CurrentMonth),
            "all" => Some(RangePreset::AllTime),
            _ => None,
        }
    }

    pub fn all() -> [RangePreset; 7] {
        [
            RangePreset::Last2Hours,
            RangePreset::Last6Hours,
            RangePreset::Last24Hours,
            RangePreset::Last3Days,
            RangePreset::Last7Days,
            RangePreset::CurrentMonth,
            RangePreset::AllTime,
        ]
    }

    /// Resolve against the offset-adjusted current time.
    pub fn resolve(&self) -> TimeRange {
        self.resolve_at(now_with_offset())
    }

    /// Resolve with `now` as the end of the range.
    ///
    /// `now` is unix seconds, already offset-adjusted. The 24h/3d/7d
    /// presets look back one extra hour; the month preset starts one hour
    /// before the first midnight of the current month.
    pub fn resolve_at(&self, now: i64) -> TimeRange {
        let start = match self {
            RangePreset::Last2Hours => now - Duration::hours(2).num_seconds(),
            RangePreset::Last6Hours => now - Duration::hours(6).num_seconds(),
            RangePreset::Last24Hours => now - Duration::hours(25).num_seconds(),
            RangePreset::Last3Days => now - (Duration::days(3) + Duration::hours(1)).num_seconds(),
            RangePreset::Last7Days => now - (Duration::days(7) + Duration::hours(1)).num_seconds(),
            RangePreset::CurrentMonth => month_floor(now) - Duration::hours(1).num_seconds(),
            RangePreset::AllTime => ALL_TIME_START,
        };

        TimeRange::new(start, now)
    }
}

/// Current unix time shifted into the feed's recording zone.
///
/// Second precision; sub-second components truncate to zero.
pub fn now_with_offset() -> i64 {
    Utc::now().timestamp() + TIME_OFFSET_SECS
}

/// Midnight on the first day of the month containing `ts`.
fn month_floor(ts: i64) -> i64 {
    let date = DateTime::from_timestamp(ts, 0)
        .unwrap_or_default()
        .date_naive();
    let first = date.with_day(1).unwrap_or(date);
    first.and_time(NaiveTime::MIN).and_utc().timestamp()
}
