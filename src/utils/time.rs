//! Time utilities: one shared parser for every time-of-day form a booking
//! may carry, plus minute formatting.

use crate::errors::TimeParseError;
use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2})(?::(\d{2}))?(?:\s*([AaPp])\.?\s*[Mm]\.?)?$")
        .expect("clock pattern is valid")
});

static ISO_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]").expect("ISO prefix pattern is valid"));

const ISO_NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Convert a time-of-day string into minutes since midnight (0..=1439).
///
/// Accepted forms:
/// - `HH:MM`, `HH:MM:SS` (24-hour)
/// - `h:MM AM`, `h:MM:SS pm` (12-hour, marker case-insensitive)
/// - ISO-8601 date-times; the wall-clock part is used as written
///
/// Seconds are truncated.
pub fn time_to_minutes(input: &str) -> Result<u32, TimeParseError> {
    let t = parse_time_of_day(input)?;
    Ok(t.hour() * 60 + t.minute())
}

/// Same as [`time_to_minutes`] but returns the parsed `NaiveTime`.
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, TimeParseError> {
    let s = input.trim();

    if ISO_PREFIX_RE.is_match(s) {
        return parse_iso_wall_clock(s).ok_or_else(|| TimeParseError::Malformed(s.to_string()));
    }

    let caps = CLOCK_RE
        .captures(s)
        .ok_or_else(|| TimeParseError::Malformed(s.to_string()))?;

    // the pattern only captures ASCII digits, at most two per group
    let number = |i: usize| -> u32 {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };

    let mut hour = number(1);
    let minute = number(2);
    let second = number(3);

    match caps.get(4).map(|m| m.as_str().to_ascii_uppercase()) {
        Some(marker) => {
            if !(1..=12).contains(&hour) {
                return Err(TimeParseError::HourOutOfRange {
                    value: s.to_string(),
                    min: 1,
                    max: 12,
                });
            }
            hour %= 12;
            if marker == "P" {
                hour += 12;
            }
        }
        None => {
            if hour > 23 {
                return Err(TimeParseError::HourOutOfRange {
                    value: s.to_string(),
                    min: 0,
                    max: 23,
                });
            }
        }
    }

    if minute > 59 {
        return Err(TimeParseError::MinuteOutOfRange(s.to_string()));
    }
    if second > 59 {
        return Err(TimeParseError::SecondOutOfRange(s.to_string()));
    }

    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| TimeParseError::Malformed(s.to_string()))
}

fn parse_iso_wall_clock(s: &str) -> Option<NaiveTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local().time());
    }

    ISO_NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.time())
}

/// Parse a timeline window bound. Accepts every form of [`time_to_minutes`]
/// plus `24:00`, which stands for the end of the day (1440).
pub fn parse_window_bound(input: &str) -> Result<u32, TimeParseError> {
    match input.trim() {
        "24:00" | "24:00:00" => Ok(MINUTES_PER_DAY),
        other => time_to_minutes(other),
    }
}

/// Render minutes since midnight as `HH:MM`; values past midnight get a
/// `+1` day suffix (1500 → `01:00+1`).
pub fn format_minutes(mins: u32) -> String {
    let day = mins / MINUTES_PER_DAY;
    let m = mins % MINUTES_PER_DAY;
    let base = format!("{:02}:{:02}", m / 60, m % 60);

    if mins == MINUTES_PER_DAY {
        "24:00".to_string()
    } else if day > 0 {
        format!("{base}+{day}")
    } else {
        base
    }
}
