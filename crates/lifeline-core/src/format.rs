//! Pure display formatters.
//!
//! Nothing in here fails: malformed input falls back to the raw value.

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, TimeZone, Utc};
use std::fmt::Display;

/// Format a raw phone string for display.
///
/// - 10 digits: `(AAA) BBB-CCCC`
/// - 11 digits with a leading `1`: `+1 (BBB) CCC-DDDD`
/// - digits exactly `911`: `"911"`
/// - anything else: the raw input
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        11 if digits.starts_with('1') => {
            format!("+1 ({}) {}-{}", &digits[1..4], &digits[4..7], &digits[7..])
        }
        _ if digits == "911" => digits,
        _ => raw.to_string(),
    }
}

/// Whole years elapsed between `birth_date` and `as_of`.
///
/// Birthdays are compared by (month, day), so a Feb 29 birth date is reached
/// on Mar 1 in non-leap years. Never negative.
pub fn compute_age(birth_date: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - birth_date.year();
    if (as_of.month(), as_of.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age.max(0)
}

/// "March 15, 2024, 02:30 PM" in the instant's own timezone
pub fn format_last_updated<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format("%B %-d, %Y, %I:%M %p").to_string()
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-03-15T14:30:00.000Z`
pub fn format_iso8601(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// "March 15, 1985"
pub fn format_birth_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn tel_uri(phone: &str) -> String {
    format!("tel:{}", phone)
}
