use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use regex::Regex;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a `YYYY-MM` month filter into (year, month). Months are 1-based.
pub fn parse_month(s: &str) -> AppResult<(i32, u32)> {
    let re = Regex::new(r"^(\d{4})-(\d{1,2})$").expect("valid month regex");
    let caps = re
        .captures(s.trim())
        .ok_or_else(|| AppError::InvalidMonth(s.to_string()))?;

    let year: i32 = caps[1].parse().map_err(|_| AppError::InvalidMonth(s.into()))?;
    let month: u32 = caps[2].parse().map_err(|_| AppError::InvalidMonth(s.into()))?;

    if !(1..=12).contains(&month) {
        return Err(AppError::InvalidMonth(s.to_string()));
    }

    Ok((year, month))
}

/// Label for chart axes: the month-day portion of a date (`MM-DD`).
pub fn month_day_label(d: NaiveDate) -> String {
    d.format("%m-%d").to_string()
}
