//! Time-of-day parsing for time-clock exports.
//!
//! Accepts 24h `HH:MM[:SS]` and 12h strings with Spanish meridiem markers
//! (`a. m.`, `p.m.`, `pm`, ...). Parsing is structural only: values are
//! not range-checked, so `25:99` yields 1599 and callers must tolerate it.

use regex::Regex;
use std::sync::LazyLock;

pub const MINUTES_PER_DAY: i64 = 1440;

static PM_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"p\.?\s?m\.?").expect("valid pm regex"));
static AM_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"a\.?\s?m\.?").expect("valid am regex"));

/// Minute offset from local midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(i64);

impl TimeOfDay {
    pub fn minutes(self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Parse a time-of-day string into minutes since midnight.
///
/// Returns `None` for empty strings, placeholder dashes and anything that
/// does not split into at least `hour:minute` integers.
pub fn parse_to_minutes(text: &str) -> Option<TimeOfDay> {
    let normalized = text.trim().to_lowercase();
    if is_placeholder(&normalized) {
        return None;
    }

    let (rest, meridiem) = if PM_MARKER.is_match(&normalized) {
        (PM_MARKER.replace(&normalized, "").into_owned(), Some(Meridiem::Pm))
    } else if AM_MARKER.is_match(&normalized) {
        (AM_MARKER.replace(&normalized, "").into_owned(), Some(Meridiem::Am))
    } else {
        (normalized, None)
    };

    let parts: Vec<&str> = rest.trim().split(':').collect();
    if parts.len() < 2 {
        return None;
    }

    let mut hour: i64 = parts[0].trim().parse().ok()?;
    let minute: i64 = parts[1].trim().parse().ok()?;

    match meridiem {
        Some(Meridiem::Pm) if hour < 12 => hour += 12,
        Some(Meridiem::Am) if hour == 12 => hour = 0,
        _ => {}
    }

    // Oversized hours are unparseable rather than wrapping.
    Some(TimeOfDay(hour.checked_mul(60)?.checked_add(minute)?))
}

/// Hours between two time strings, assuming the shift crosses midnight at
/// most once. `None` when either side is unparseable.
pub fn shift_duration_hours(start: Option<&str>, end: Option<&str>) -> Option<f64> {
    let start = parse_to_minutes(start?)?;
    let end = parse_to_minutes(end?)?;

    let mut delta = end.minutes().checked_sub(start.minutes())?;
    if delta < 0 {
        delta += MINUTES_PER_DAY;
    }

    Some(delta as f64 / 60.0)
}

/// Parse a precomputed hours cell: `HH:MM` durations or decimals written
/// with either `.` or `,`.
pub fn parse_hours_value(text: &str) -> Option<f64> {
    let t = text.trim();
    if is_placeholder(t) {
        return None;
    }

    let hours = if let Some((h, m)) = t.split_once(':') {
        let h: f64 = h.trim().parse().ok()?;
        // "08:30:00" → ignore seconds
        let m: f64 = m.split(':').next()?.trim().parse().ok()?;
        h + m / 60.0
    } else {
        t.replace(',', ".").parse().ok()?
    };

    if hours.is_finite() && hours >= 0.0 {
        Some(hours)
    } else {
        None
    }
}

fn is_placeholder(s: &str) -> bool {
    matches!(s, "" | "-" | "—" | "--")
}
