//! Date-serial handling.
//!
//! Date keys are Excel date serials carried as strings. Every comparison
//! treats them as real numbers, and display formatting converts the serial
//! to a calendar date via the 25569-day offset between the Excel epoch and
//! 1970-01-01.

use std::cmp::Ordering;

use chrono::{Datelike, Duration, NaiveDate};

/// Days between the Excel date epoch and 1970-01-01.
pub const UNIX_EPOCH_SERIAL_OFFSET: f64 = 25569.0;

/// Parses a date key into its numeric serial value. Returns `None` for keys
/// that are not numeric.
pub fn serial_value(key: &str) -> Option<f64> {
    key.trim().parse().ok()
}

/// Orders two date keys by numeric value. Non-numeric keys sort before every
/// numeric key so they surface at the front of an axis rather than vanish.
pub fn compare_keys(lhs: &str, rhs: &str) -> Ordering {
    match (serial_value(lhs), serial_value(rhs)) {
        (Some(lhs), Some(rhs)) => lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => lhs.cmp(rhs),
    }
}

/// Formats a date key for display as `"{day}{ordinal} {MonthName}"`, e.g.
/// `"1st January"` for serial 45292.
///
/// The year is dropped from display, so two keys differing only by year
/// render identically. Keys that are not numeric, or whose serial falls
/// outside the representable calendar range, are echoed back unchanged.
pub fn format_date_key(key: &str) -> String {
    let Some(serial) = serial_value(key) else {
        return key.to_string();
    };
    let epoch_days = (serial - UNIX_EPOCH_SERIAL_OFFSET).floor() as i64;
    let Some(date) = Duration::try_days(epoch_days)
        .and_then(|days| NaiveDate::from_ymd_opt(1970, 1, 1)?.checked_add_signed(days))
    else {
        return key.to_string();
    };
    let day = date.day();
    format!("{day}{} {}", ordinal_suffix(day), date.format("%B"))
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11 | 12 | 13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
