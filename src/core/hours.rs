//! Worked-hours arithmetic over wall-clock time-of-day pairs.

use chrono::NaiveTime;

use crate::utils::time::minutes_of_day;

const MINUTES_PER_DAY: i64 = 24 * 60;
/// Fixed unpaid break, in hours.
const BREAK_HOURS: f64 = 0.5;

/// Compute net decimal hours worked between two wall-clock times.
///
/// An end time at or before the start time is read as crossing midnight:
/// the delta wraps by a full day, so identical times mean a 24-hour span.
/// Either time absent yields 0, which callers must treat as "invalid, do
/// not save". The result is never negative.
pub fn compute_hours(
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    had_break: bool,
) -> f64 {
    let (start, end) = match (start, end) {
        (Some(s), Some(e)) => (s, e),
        _ => return 0.0,
    };

    let mut delta = minutes_of_day(end) - minutes_of_day(start);
    if delta <= 0 {
        delta += MINUTES_PER_DAY;
    }

    let mut hours = delta as f64 / 60.0;
    if had_break {
        hours = (hours - BREAK_HOURS).max(0.0);
    }
    hours
}
