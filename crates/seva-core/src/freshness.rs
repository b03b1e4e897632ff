//! Data freshness rules.
//!
//! Age is counted in whole days (floored) between the snapshot timestamp and
//! the moment of the request. Figures older than [`STALE_AFTER_DAYS`] are
//! flagged as stale.

use chrono::{DateTime, Utc};

/// Age in days beyond which a snapshot is stale.
pub const STALE_AFTER_DAYS: i64 = 35;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days elapsed from `timestamp` to `now`, floored.
///
/// A timestamp in the future yields a negative age.
pub fn data_age_days(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - timestamp).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Whether a snapshot of the given age is stale.
pub fn is_stale(age_days: i64) -> bool {
    age_days > STALE_AFTER_DAYS
}
