//! Time utilities: parsing HH:MM, formatting, minutes-since-midnight.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Minutes since midnight for a wall-clock time (seconds ignored).
pub fn minutes_of_day(t: NaiveTime) -> i64 {
    (t.hour() as i64) * 60 + t.minute() as i64
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}
