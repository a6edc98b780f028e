//! Relative timestamps.
//!
//! Coarse "time ago" labels for message headers. Months are a fixed 30 days
//! and years a fixed 365 days; labels are never singularized ("1 anos
//! atrás"), matching the labels users already see in the web client.

use chrono::{DateTime, Utc};

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;
const MONTH_MS: i64 = 30 * DAY_MS;
const YEAR_MS: i64 = 365 * DAY_MS;

/// (exclusive upper bound, unit length, label)
const BANDS: [(i64, i64, &str); 6] = [
    (MINUTE_MS, SECOND_MS, "segundos"),
    (HOUR_MS, MINUTE_MS, "minutos"),
    (DAY_MS, HOUR_MS, "horas"),
    (WEEK_MS, DAY_MS, "dias"),
    (MONTH_MS, WEEK_MS, "semanas"),
    (YEAR_MS, MONTH_MS, "meses"),
];

/// Format the time elapsed from `then` to `now`.
///
/// Timestamps after `now` (clock skew between client and backend) count as
/// zero elapsed time.
pub fn format_relative(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let elapsed = (now - then).num_milliseconds().max(0);

    let (unit, label) = BANDS
        .iter()
        .find(|(bound, _, _)| elapsed < *bound)
        .map_or((YEAR_MS, "anos"), |&(_, unit, label)| (unit, label));

    format!("{} {label} atrás", elapsed / unit)
}
