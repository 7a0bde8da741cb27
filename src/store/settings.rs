//! Per-identity hourly-rate and tax-rate documents on the remote substrate.
//!
//! Settings and the work log are independently durable: a failure here is
//! reported as a warning and never blocks local log operations.

use crate::errors::{AppError, AppResult};
use crate::models::settings::{RateDoc, UserSettings};
use crate::store::kv::KvStore;

const HOURLY_DOC: &str = "hourly";
const TAX_DOC: &str = "tax";

pub struct SettingsStore<K: KvStore> {
    store: K,
}

impl<K: KvStore> SettingsStore<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    fn doc_key(uid: &str, kind: &str) -> String {
        format!("{uid}/{kind}")
    }

    fn read_rate(&self, uid: &str, kind: &str) -> AppResult<Option<f64>> {
        let raw = match self.store.get(&Self::doc_key(uid, kind)) {
            Ok(v) => v,
            Err(e) => return Err(AppError::RemoteSettings(e.to_string())),
        };

        match raw {
            Some(raw) => {
                let doc: RateDoc = serde_json::from_str(&raw)
                    .map_err(|e| AppError::RemoteSettings(e.to_string()))?;
                Ok(Some(doc.rate))
            }
            None => Ok(None),
        }
    }

    fn write_rate(&mut self, uid: &str, kind: &str, rate: f64) -> AppResult<()> {
        let raw = serde_json::to_string(&RateDoc { rate })
            .map_err(|e| AppError::RemoteSettings(e.to_string()))?;
        self.store
            .put(&Self::doc_key(uid, kind), &raw)
            .map_err(|e| AppError::RemoteSettings(e.to_string()))
    }

    /// Fetch both settings for an identity. Each document defaults
    /// independently when missing.
    pub fn load(&self, uid: &str) -> AppResult<UserSettings> {
        let defaults = UserSettings::default();
        Ok(UserSettings {
            hourly_rate: self.read_rate(uid, HOURLY_DOC)?.unwrap_or(defaults.hourly_rate),
            tax_rate: self.read_rate(uid, TAX_DOC)?.unwrap_or(defaults.tax_rate),
        })
    }

    pub fn save_hourly(&mut self, uid: &str, rate: f64) -> AppResult<()> {
        self.write_rate(uid, HOURLY_DOC, rate)
    }

    pub fn save_tax(&mut self, uid: &str, rate: f64) -> AppResult<()> {
        self.write_rate(uid, TAX_DOC, rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::MemKv;

    #[test]
    fn missing_documents_default_independently() {
        let mut store = SettingsStore::new(MemKv::default());
        store.save_hourly("u1", 30.0).unwrap();

        let s = store.load("u1").unwrap();
        assert_eq!(s.hourly_rate, 30.0);
        assert_eq!(s.tax_rate, 13.0); // tax doc absent, default applies

        let other = store.load("someone_else").unwrap();
        assert_eq!(other, UserSettings::default());
    }

    #[test]
    fn rates_are_scoped_per_identity() {
        let mut store = SettingsStore::new(MemKv::default());
        store.save_hourly("alice", 40.0).unwrap();
        store.save_tax("alice", 20.0).unwrap();
        store.save_hourly("bob", 18.0).unwrap();

        assert_eq!(store.load("alice").unwrap().hourly_rate, 40.0);
        assert_eq!(store.load("alice").unwrap().tax_rate, 20.0);
        assert_eq!(store.load("bob").unwrap().hourly_rate, 18.0);
        assert_eq!(store.load("bob").unwrap().tax_rate, 13.0);
    }

    #[test]
    fn corrupt_document_surfaces_as_settings_error() {
        let mut kv = MemKv::default();
        kv.put("u1/hourly", "not json").unwrap();

        let store = SettingsStore::new(kv);
        assert!(matches!(
            store.load("u1"),
            Err(AppError::RemoteSettings(_))
        ));
    }
}
