//! Number, date and text formatting for display.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Compact count: `1500` -> `1.5K`, `2500000` -> `2.5M`, `42` -> `42`.
pub fn format_number(value: u64) -> String {
    if value >= 1_000_000 {
        one_decimal(value, 1_000_000, 'M')
    } else if value >= 1_000 {
        one_decimal(value, 1_000, 'K')
    } else {
        value.to_string()
    }
}

/// `value / unit` to one decimal. A quotient that lands exactly on a
/// half-tenth rounds up (`1250` -> `1.3K`); `{:.1}` alone would round it to
/// even. Other quotients round as their nearest `f64` does.
fn one_decimal(value: u64, unit: u64, suffix: char) -> String {
    let exact_half = value % (unit / 2) == unit / 4;
    if exact_half {
        let tenths = value / (unit / 10) + 1;
        format!("{}.{}{suffix}", tenths / 10, tenths % 10)
    } else {
        format!("{:.1}{suffix}", value as f64 / unit as f64)
    }
}

/// Relative age of a date, one bucket per ascending day threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDay {
    JustNow,
    Today,
    Yesterday,
    DaysAgo(i64),
    WeeksAgo(i64),
    MonthsAgo(i64),
    YearsAgo(i64),
}

impl RelativeDay {
    /// Buckets by whole days, rounding partial days up.
    pub fn between(date: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff_ms = (now - date).num_milliseconds().abs();
        let days = ceil_div(diff_ms, MS_PER_DAY);
        match days {
            0 => RelativeDay::JustNow,
            1 => RelativeDay::Today,
            2 => RelativeDay::Yesterday,
            3..=7 => RelativeDay::DaysAgo(days - 1),
            8..=30 => RelativeDay::WeeksAgo(ceil_div(days, 7)),
            31..=365 => RelativeDay::MonthsAgo(ceil_div(days, 30)),
            _ => RelativeDay::YearsAgo(ceil_div(days, 365)),
        }
    }
}

impl fmt::Display for RelativeDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeDay::JustNow => write!(f, "Just now"),
            RelativeDay::Today => write!(f, "Today"),
            RelativeDay::Yesterday => write!(f, "Yesterday"),
            RelativeDay::DaysAgo(n) => write!(f, "{n} days ago"),
            RelativeDay::WeeksAgo(n) => write!(f, "{n} weeks ago"),
            RelativeDay::MonthsAgo(n) => write!(f, "{n} months ago"),
            RelativeDay::YearsAgo(n) => write!(f, "{n} years ago"),
        }
    }
}

fn ceil_div(value: i64, divisor: i64) -> i64 {
    (value + divisor - 1) / divisor
}

pub fn format_date(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    RelativeDay::between(date, now).to_string()
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized date: {0}")]
pub struct DateParseError(pub String);

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, DateParseError> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DateParseError(raw.to_string()))
}

pub fn format_date_str(raw: &str, now: DateTime<Utc>) -> Result<String, DateParseError> {
    parse_date(raw).map(|date| format_date(date, now))
}

/// Cuts `text` to `max_chars` characters and appends `...`.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim())
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
