// Clock-time utilities
// Conversions between "HH:MM" strings and minute offsets, plus slot rounding

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Snapping unit applied to every interactive time edit.
pub const GRANULARITY_MINUTES: i32 = 5;

pub const MINUTES_PER_HOUR: i32 = 60;
pub const MINUTES_PER_DAY: i32 = 24 * MINUTES_PER_HOUR;

/// Rounded minute values are clamped to two days either side of midnight.
pub const MINUTES_LIMIT: i32 = 2 * MINUTES_PER_DAY;

/// Parse an `"HH:MM"` string into minutes since midnight.
///
/// Malformed or empty input yields 0 rather than an error. Hours above 23 are
/// accepted because a drag can push an end time past midnight.
pub fn time_to_minutes(text: &str) -> i32 {
    parse_hh_mm(text).unwrap_or(0)
}

/// Format minutes since midnight as a zero-padded `"HH:MM"` string.
///
/// The input is rounded half-up to a whole minute first.
pub fn minutes_to_time(minutes: f64) -> String {
    format_hh_mm(round_half_up(minutes))
}

/// Round to the nearest multiple of `granularity`, halves rounding up.
///
/// The input is first clamped to `±MINUTES_LIMIT`; NaN counts as 0.
pub fn round_to_nearest(minutes: f64, granularity: i32) -> i32 {
    let minutes = clamp_minutes(minutes);
    if granularity <= 0 {
        return round_half_up(minutes);
    }
    let step = f64::from(granularity);
    round_half_up(minutes / step).saturating_mul(granularity)
}

/// Round to the board's 5-minute slots.
pub fn round_to_slot(minutes: f64) -> i32 {
    round_to_nearest(minutes, GRANULARITY_MINUTES)
}

fn clamp_minutes(minutes: f64) -> f64 {
    if minutes.is_nan() {
        return 0.0;
    }
    let limit = f64::from(MINUTES_LIMIT);
    minutes.clamp(-limit, limit)
}

fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

fn parse_hh_mm(text: &str) -> Option<i32> {
    let (hours, minutes) = text.trim().split_once(':')?;
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours < 0 || !(0..MINUTES_PER_HOUR).contains(&minutes) {
        return None;
    }
    hours.checked_mul(MINUTES_PER_HOUR)?.checked_add(minutes)
}

fn format_hh_mm(total: i32) -> String {
    let hours = total.div_euclid(MINUTES_PER_HOUR);
    let minutes = total.rem_euclid(MINUTES_PER_HOUR);
    format!("{:02}:{:02}", hours, minutes)
}

/// A wall-clock time on the board, stored as minutes since midnight.
///
/// Values past 24:00 are representable so that a case dragged late in the
/// day keeps its full duration; nothing here wraps across day boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(i32);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    pub const fn from_minutes(minutes: i32) -> Self {
        Self(minutes)
    }

    pub fn from_hm(hours: i32, minutes: i32) -> Self {
        Self(hours.saturating_mul(MINUTES_PER_HOUR).saturating_add(minutes))
    }

    pub const fn minutes(self) -> i32 {
        self.0
    }

    /// Shift by a signed number of minutes, saturating at the `i32` bounds.
    pub fn offset(self, minutes: i32) -> Self {
        Self(self.0.saturating_add(minutes))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hh_mm(self.0))
    }
}

/// Error returned when strict `"HH:MM"` parsing fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time '{0}', expected HH:MM")]
pub struct ParseClockTimeError(String);

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hh_mm(s)
            .map(ClockTime)
            .ok_or_else(|| ParseClockTimeError(s.to_string()))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// A half-open `[start, end)` span of board time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl Interval {
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Length in minutes; zero or negative for degenerate spans.
    pub fn duration(&self) -> i32 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// True when the two spans share at least one minute.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True when the span intersects `[window_start, window_end)` minutes.
    pub fn intersects_window(&self, window_start: i32, window_end: i32) -> bool {
        self.end.minutes() > window_start && self.start.minutes() < window_end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
