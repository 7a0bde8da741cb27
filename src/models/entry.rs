use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::config::default_tax_rate;

/// One persisted work session for a single calendar date.
///
/// `hours` is derived at save time (break already subtracted) and stored,
/// never recomputed on read. `rate` and `tax_rate` are snapshots of the
/// session settings in effect when the entry was saved; later settings
/// changes do not touch existing entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Whether the fixed 30-minute unpaid break was taken.
    #[serde(default)]
    pub had_break: bool,
    /// Net decimal hours worked, always >= 0.
    pub hours: f64,
    /// Hourly pay rate in effect when the entry was saved.
    pub rate: f64,
    /// Tax percentage (0-100). Older data may lack the field.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
}

impl LogEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Gross pay for this single entry.
    pub fn salary(&self) -> f64 {
        self.hours * self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_json_without_tax() -> &'static str {
        r#"{
            "date": "2025-03-10",
            "start_time": "09:00:00",
            "end_time": "17:30:00",
            "hours": 8.5,
            "rate": 20.0
        }"#
    }

    #[test]
    fn missing_optional_fields_get_defaults() {
        let e: LogEntry = serde_json::from_str(entry_json_without_tax()).unwrap();
        assert!(!e.had_break);
        assert_eq!(e.tax_rate, 13.0);
        assert_eq!(e.salary(), 170.0);
    }

    #[test]
    fn serde_round_trip_preserves_fields() {
        let e: LogEntry = serde_json::from_str(entry_json_without_tax()).unwrap();
        let back: LogEntry = serde_json::from_str(&serde_json::to_string(&e).unwrap()).unwrap();
        assert_eq!(back, e);
    }
}
