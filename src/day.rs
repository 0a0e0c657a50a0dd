//! Day-index arithmetic.

use chrono::{Datelike, NaiveDate, Utc};

/// Whole days elapsed since 1970-01-01 (UTC).
pub type DayIndex = i64;

/// Days from 0001-01-01 to 1970-01-01 in the proleptic Gregorian calendar.
const UNIX_EPOCH_FROM_CE: i64 = 719_163;

pub fn day_index(date: NaiveDate) -> DayIndex {
    i64::from(date.num_days_from_ce()) - UNIX_EPOCH_FROM_CE
}

pub fn today() -> DayIndex {
    day_index(Utc::now().date_naive())
}
