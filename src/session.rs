//! Session state and controller operations.
//!
//! The session is an explicit struct, not ambient globals: identity, the
//! current rates, the date being composed, and the in-progress draft. It is
//! the only owner of draft/edit state; the draft is discarded after a
//! successful save.

use chrono::{NaiveDate, NaiveTime};

use crate::auth::Identity;
use crate::core::compute_hours;
use crate::errors::{AppError, AppResult};
use crate::models::settings::UserSettings;
use crate::models::LogEntry;
use crate::store::kv::KvStore;
use crate::store::WorkLogStore;

/// In-progress, unsaved field values for the entry being composed or edited.
#[derive(Debug, Default, Clone)]
pub struct Draft {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub had_break: bool,
}

pub struct Session {
    pub user: Option<Identity>,
    pub hourly_rate: f64,
    pub tax_rate: f64,
    pub selected_date: NaiveDate,
    pub editing_date: Option<NaiveDate>,
    pub draft: Draft,
    /// Bumped on every manual rate edit; guards stale remote loads.
    edit_seq: u64,
}

impl Session {
    pub fn new(today: NaiveDate, defaults: UserSettings) -> Self {
        Self {
            user: None,
            hourly_rate: defaults.hourly_rate,
            tax_rate: defaults.tax_rate,
            selected_date: today,
            editing_date: None,
            draft: Draft::default(),
            edit_seq: 0,
        }
    }

    /// React to the identity provider's change notification. Losing the
    /// identity resets rates to the unauthenticated defaults; the work log
    /// itself is identity-agnostic and untouched.
    pub fn on_identity_changed(&mut self, user: Option<Identity>, defaults: UserSettings) {
        self.user = user;
        if self.user.is_none() {
            self.hourly_rate = defaults.hourly_rate;
            self.tax_rate = defaults.tax_rate;
            self.editing_date = None;
            self.draft = Draft::default();
        }
    }

    // --- remote settings race guard ---

    /// Capture the edit sequence at the moment a remote load is dispatched.
    pub fn begin_remote_load(&self) -> u64 {
        self.edit_seq
    }

    /// Apply a remote settings response, unless the user edited a rate
    /// since the load was dispatched; a stale response is discarded.
    /// Returns whether the response was applied.
    pub fn apply_remote_settings(&mut self, dispatched_at: u64, settings: UserSettings) -> bool {
        if dispatched_at != self.edit_seq {
            return false;
        }
        self.hourly_rate = settings.hourly_rate;
        self.tax_rate = settings.tax_rate;
        true
    }

    pub fn set_hourly_rate(&mut self, rate: f64) {
        self.hourly_rate = rate;
        self.edit_seq += 1;
    }

    pub fn set_tax_rate(&mut self, rate: f64) {
        self.tax_rate = rate;
        self.edit_seq += 1;
    }

    // --- draft / edit flow ---

    /// Copy an existing entry into the draft for editing. The entry's rate
    /// snapshot becomes the session rate, as in the original edit flow.
    pub fn start_edit(&mut self, entry: &LogEntry) {
        self.selected_date = entry.date;
        self.draft = Draft {
            start: Some(entry.start_time),
            end: Some(entry.end_time),
            had_break: entry.had_break,
        };
        self.hourly_rate = entry.rate;
        self.editing_date = Some(entry.date);
    }

    /// Validate the draft, upsert it into the work log, and clear the
    /// draft. Zero worked hours (missing or degenerate times) aborts with
    /// a validation error and mutates nothing.
    pub fn save<K: KvStore>(&mut self, log: &mut WorkLogStore<K>) -> AppResult<LogEntry> {
        let hours = compute_hours(self.draft.start, self.draft.end, self.draft.had_break);
        if hours <= 0.0 {
            return Err(AppError::Validation(
                "enter valid start and end times".to_string(),
            ));
        }

        // draft times are present: compute_hours returned non-zero
        let (start, end) = (self.draft.start.unwrap(), self.draft.end.unwrap());
        let date = self.editing_date.unwrap_or(self.selected_date);

        let entry = LogEntry {
            date,
            start_time: start,
            end_time: end,
            had_break: self.draft.had_break,
            hours,
            rate: self.hourly_rate,
            tax_rate: self.tax_rate,
        };
        log.upsert(entry.clone())?;

        self.draft = Draft::default();
        self.editing_date = None;
        Ok(entry)
    }

    pub fn delete<K: KvStore>(
        &self,
        log: &mut WorkLogStore<K>,
        date: NaiveDate,
    ) -> AppResult<()> {
        log.remove(date)
    }
}
