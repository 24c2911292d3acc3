//! Wall-clock time-of-day helpers
//!
//! The club log expresses every time as a strict `HH:MM` pair. These helpers
//! parse and format that shape and provide a serde adapter for it.

use chrono::NaiveTime;

/// Format string for club clock times
pub const CLOCK_FORMAT: &str = "%H:%M";

/// Parse a strict `HH:MM` time of day (two-digit hours and minutes)
pub fn parse_clock(s: &str) -> Option<NaiveTime> {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    if ![0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit()) {
        return None;
    }
    NaiveTime::parse_from_str(s, CLOCK_FORMAT).ok()
}

/// Format a time of day as `HH:MM`
pub fn format_clock(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// Serde adapter storing a [`NaiveTime`] as an `HH:MM` string
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as `HH:MM`
    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(super::CLOCK_FORMAT))
    }

    /// Deserialize from `HH:MM`
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_clock(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("expected HH:MM time, got '{}'", s)))
    }
}
