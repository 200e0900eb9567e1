//! Relative age formatting
//!
//! Renders elapsed time the way kubectl's AGE column does, but always with a
//! single unit. Conversions use fixed 24h days, 30d months and 365d years.

use chrono::{DateTime, Duration, Utc};

const HOURS_PER_DAY: i64 = 24;
const HOURS_PER_MONTH: i64 = HOURS_PER_DAY * 30;
const HOURS_PER_YEAR: i64 = HOURS_PER_DAY * 365;

/// Format the age of something created at `created` as seen at `now`
///
/// Thresholds are strict: exactly 24h is `24h`, not `1d`. Values are
/// truncated, never rounded up. A `created` in the future yields `0s`.
pub fn format_age(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_elapsed(now.signed_duration_since(created))
}

/// Format an elapsed duration with the largest unit it strictly exceeds
pub fn format_elapsed(elapsed: Duration) -> String {
    let elapsed = elapsed.max(Duration::zero());
    let hours = elapsed.num_hours();

    if elapsed > Duration::hours(HOURS_PER_YEAR) {
        format!("{}y", hours / HOURS_PER_YEAR)
    } else if elapsed > Duration::hours(HOURS_PER_MONTH) {
        format!("{}mo", hours / HOURS_PER_MONTH)
    } else if elapsed > Duration::hours(HOURS_PER_DAY) {
        format!("{}d", hours / HOURS_PER_DAY)
    } else if elapsed > Duration::hours(1) {
        format!("{}h", hours)
    } else if elapsed > Duration::minutes(1) {
        format!("{}m", elapsed.num_minutes())
    } else {
        format!("{}s", elapsed.num_seconds())
    }
}
