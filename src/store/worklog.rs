//! Date-keyed collection of work sessions, write-through persisted as a
//! single JSON array on the local key-value substrate.

use chrono::NaiveDate;

use crate::errors::{AppError, AppResult};
use crate::models::LogEntry;
use crate::store::kv::KvStore;

/// Fixed key of the serialized collection on the local substrate.
pub const WORKLOG_KEY: &str = "worklog";

pub struct WorkLogStore<K: KvStore> {
    entries: Vec<LogEntry>,
    store: K,
}

impl<K: KvStore> WorkLogStore<K> {
    /// Load the collection from the substrate. Missing or malformed data
    /// falls back to an empty collection; a corrupt file must never take
    /// the tool down.
    pub fn open(store: K) -> AppResult<Self> {
        let entries = match store.get(WORKLOG_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(Self { entries, store })
    }

    /// Insert or replace the entry for its date. The previous entry for the
    /// same date is dropped entirely, no field merge. Entries with no worked
    /// time are rejected before anything is touched.
    pub fn upsert(&mut self, entry: LogEntry) -> AppResult<()> {
        if entry.hours <= 0.0 {
            return Err(AppError::Validation(
                "worked hours must be greater than zero".to_string(),
            ));
        }

        self.entries.retain(|e| e.date != entry.date);
        self.entries.push(entry);
        self.persist()
    }

    /// Remove the entry for a date; removing an absent date is a no-op.
    pub fn remove(&mut self, date: NaiveDate) -> AppResult<()> {
        let before = self.entries.len();
        self.entries.retain(|e| e.date != date);
        if self.entries.len() == before {
            return Ok(());
        }
        self.persist()
    }

    pub fn find(&self, date: NaiveDate) -> Option<&LogEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Full snapshot; order is not meaningful, consumers sort explicitly.
    pub fn all(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&mut self) -> AppResult<()> {
        let raw = serde_json::to_string(&self.entries)?;
        self.store.put(WORKLOG_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::MemKv;
    use chrono::NaiveTime;

    fn entry(date: &str, hours: f64) -> LogEntry {
        LogEntry {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
            had_break: false,
            hours,
            rate: 20.0,
            tax_rate: 13.0,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn upsert_replaces_same_date_entirely() {
        let mut log = WorkLogStore::open(MemKv::default()).unwrap();
        log.upsert(entry("2025-05-01", 8.0)).unwrap();

        let mut replacement = entry("2025-05-01", 6.0);
        replacement.rate = 30.0;
        replacement.had_break = true;
        log.upsert(replacement.clone()).unwrap();

        assert_eq!(log.len(), 1);
        assert_eq!(log.find(date("2025-05-01")), Some(&replacement));
    }

    #[test]
    fn upsert_rejects_non_positive_hours() {
        let mut log = WorkLogStore::open(MemKv::default()).unwrap();
        log.upsert(entry("2025-05-01", 8.0)).unwrap();

        let err = log.upsert(entry("2025-05-02", 0.0)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        // the failed save mutated nothing
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn remove_missing_date_is_a_noop() {
        let mut log = WorkLogStore::open(MemKv::default()).unwrap();
        log.upsert(entry("2025-05-01", 8.0)).unwrap();

        log.remove(date("1999-01-01")).unwrap();
        assert_eq!(log.len(), 1);

        log.remove(date("2025-05-01")).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn persisted_collection_round_trips() {
        let mut kv = MemKv::default();
        {
            let mut log = WorkLogStore::open(kv.clone()).unwrap();
            log.upsert(entry("2025-05-01", 8.0)).unwrap();
            log.upsert(entry("2025-05-02", 7.5)).unwrap();
            kv = log.store.clone();
        }

        let reloaded = WorkLogStore::open(kv).unwrap();
        assert_eq!(reloaded.len(), 2);
        let dates: Vec<String> = reloaded.all().iter().map(|e| e.date_str()).collect();
        assert!(dates.contains(&"2025-05-01".to_string()));
        assert!(dates.contains(&"2025-05-02".to_string()));
    }

    #[test]
    fn malformed_persisted_data_falls_back_to_empty() {
        let mut kv = MemKv::default();
        kv.put(WORKLOG_KEY, "{ not json at all").unwrap();

        let log = WorkLogStore::open(kv).unwrap();
        assert!(log.is_empty());
    }
}
