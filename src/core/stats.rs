//! Derived statistics over the work log: trailing-two-week rollup, month
//! filter for history browsing, and the per-entry chart series.
//!
//! These functions only read snapshots; they never mutate the log. Sorting
//! for display is left to the callers.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::LogEntry;
use crate::utils::round2;

/// Totals over the trailing 14-calendar-day window.
#[derive(Debug, Default, PartialEq)]
pub struct TwoWeekSummary {
    pub total_hours: f64,
    pub gross_pay: f64,
    pub net_pay: f64,
}

/// Summarize entries whose date is within the trailing two-week window,
/// boundary date included. Net pay applies `tax_rate` (the session's
/// current setting) uniformly across the window, not the per-entry
/// snapshots.
pub fn two_week_summary(logs: &[LogEntry], today: NaiveDate, tax_rate: f64) -> TwoWeekSummary {
    let cutoff = today - Duration::days(14);

    let mut summary = TwoWeekSummary::default();
    for entry in logs.iter().filter(|e| e.date >= cutoff) {
        summary.total_hours += entry.hours;
        summary.gross_pay += entry.salary();
    }
    summary.net_pay = summary.gross_pay * (1.0 - tax_rate / 100.0);
    summary
}

/// Entries falling in the given calendar year/month (1-based), unsorted.
pub fn month_filter(logs: &[LogEntry], year: i32, month: u32) -> Vec<LogEntry> {
    logs.iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
        .cloned()
        .collect()
}

/// One chart point per log entry, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Month-day portion of the date (`MM-DD`).
    pub label: String,
    pub hours: f64,
    /// Gross pay for the entry, rounded to 2 decimals for display.
    pub salary: f64,
}

pub fn chart_series(logs: &[LogEntry]) -> Vec<ChartPoint> {
    logs.iter()
        .map(|e| ChartPoint {
            label: crate::utils::date::month_day_label(e.date),
            hours: e.hours,
            salary: round2(e.salary()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn entry(date: &str, hours: f64, rate: f64) -> LogEntry {
        LogEntry {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            had_break: false,
            hours,
            rate,
            tax_rate: 13.0,
        }
    }

    #[test]
    fn window_is_inclusive_of_the_boundary_date() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let logs = vec![
            entry("2025-06-06", 8.0, 20.0), // exactly 14 days back: included
            entry("2025-06-05", 8.0, 20.0), // one day older: excluded
            entry("2025-06-20", 2.0, 20.0),
        ];

        let s = two_week_summary(&logs, today, 0.0);
        assert_eq!(s.total_hours, 10.0);
        assert_eq!(s.gross_pay, 200.0);
    }

    #[test]
    fn net_pay_uses_the_current_tax_rate() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        // Entry snapshot says 13%, but the session now runs at 25%.
        let logs = vec![entry("2025-06-19", 10.0, 10.0)];

        let s = two_week_summary(&logs, today, 25.0);
        assert_eq!(s.gross_pay, 100.0);
        assert_eq!(s.net_pay, 75.0);
    }

    #[test]
    fn two_week_scenario_totals() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let logs = vec![
            entry("2025-06-18", 8.5, 20.0),  // gross 170
            entry("2025-06-19", 7.5, 15.0),  // gross 112.5
        ];

        let s = two_week_summary(&logs, today, 13.0);
        assert_eq!(s.total_hours, 16.0);
        assert_eq!(s.gross_pay, 282.5);
        assert!((s.net_pay - 282.5 * 0.87).abs() < 1e-9);
    }

    #[test]
    fn month_filter_matches_year_and_month() {
        let logs = vec![
            entry("2024-03-01", 8.0, 20.0),
            entry("2024-03-31", 8.0, 20.0),
            entry("2024-02-29", 8.0, 20.0),
            entry("2023-03-15", 8.0, 20.0),
        ];

        let march = month_filter(&logs, 2024, 3);
        assert_eq!(march.len(), 2);
        assert!(march.iter().all(|e| e.date.year() == 2024 && e.date.month() == 3));
    }

    #[test]
    fn empty_log_summarizes_to_zero() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let s = two_week_summary(&[], today, 13.0);
        assert_eq!(s, TwoWeekSummary::default());
    }

    #[test]
    fn chart_series_preserves_order_and_rounds_salary() {
        let logs = vec![
            entry("2025-06-19", 7.333333, 15.0), // 109.999995 -> 110.0
            entry("2025-06-18", 8.5, 20.0),
        ];

        let series = chart_series(&logs);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "06-19");
        assert_eq!(series[0].salary, 110.0);
        assert_eq!(series[1].label, "06-18");
        assert_eq!(series[1].salary, 170.0);
    }
}
