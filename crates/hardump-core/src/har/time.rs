//! ISO-8601 rendering of epoch timestamps.

use chrono::{DateTime, Utc};

/// Converts float seconds since the epoch to a UTC time, rounded to the microsecond.
pub fn utc_from_timestamp(ts: f64) -> Option<DateTime<Utc>> {
    if !ts.is_finite() {
        return None;
    }
    let mut secs = ts.floor();
    let mut micros = ((ts - secs) * 1_000_000.0).round();
    if micros >= 1_000_000.0 {
        secs += 1.0;
        micros -= 1_000_000.0;
    }
    DateTime::from_timestamp(secs as i64, micros as u32 * 1_000)
}

/// `YYYY-MM-DDTHH:MM:SS[.ffffff]+00:00`; the fraction only when non-zero.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    if dt.timestamp_subsec_micros() == 0 {
        dt.format("%Y-%m-%dT%H:%M:%S+00:00").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S%.6f+00:00").to_string()
    }
}

pub fn format_timestamp(ts: f64) -> Option<String> {
    utc_from_timestamp(ts).map(|dt| format_datetime(&dt))
}
