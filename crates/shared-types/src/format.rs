//! Display formatting for listing cards and avatars.
//!
//! Timestamps arrive from the backend as strings, either RFC 3339 or naive
//! `YYYY-MM-DDTHH:MM:SS[.fff]`. Naive values are read as UTC.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 1440;

/// Parse a backend timestamp, keeping its offset when it has one.
pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Relative "time ago" label in three buckets: minutes, hours, days.
///
/// Timestamps in the future count as zero minutes ago.
pub fn format_time_ago(posted: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = now.signed_duration_since(posted).num_minutes().max(0);
    if minutes < MINUTES_PER_HOUR {
        format!("{minutes} phút trước")
    } else if minutes < MINUTES_PER_DAY {
        format!("{} giờ trước", minutes / MINUTES_PER_HOUR)
    } else {
        format!("{} ngày trước", minutes / MINUTES_PER_DAY)
    }
}

/// [`format_time_ago`] over a raw backend timestamp. Empty if unparseable.
pub fn format_time_ago_str(posted: &str, now: DateTime<Utc>) -> String {
    parse_timestamp(posted)
        .map(|dt| format_time_ago(dt.with_timezone(&Utc), now))
        .unwrap_or_default()
}

/// Format a timestamp as `HH:MM` on the 24-hour clock, in its own offset.
pub fn format_clock(s: &str) -> Option<String> {
    parse_timestamp(s).map(|dt| dt.format("%H:%M").to_string())
}

/// `"HH:MM - HH:MM"` for a shift. Empty if either end is unparseable.
pub fn format_time_range(start: &str, end: &str) -> String {
    match (format_clock(start), format_clock(end)) {
        (Some(start), Some(end)) => format!("{start} - {end}"),
        _ => String::new(),
    }
}

/// Group the digits of an integer with `.` every three places.
fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Hourly rate in VND, e.g. `150000.0` -> `"150.000 đ/giờ"`.
pub fn format_hourly_rate(rate: f64) -> String {
    format!("{} đ/giờ", group_thousands(rate.round() as i64))
}

/// Up to two uppercase initials for an avatar fallback.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}
