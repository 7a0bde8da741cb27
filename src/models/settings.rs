use serde::{Deserialize, Serialize};

use crate::config::{default_hourly_rate, default_tax_rate};

/// Per-identity settings synced to the remote substrate.
/// Each field is stored as its own document and defaults independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserSettings {
    pub hourly_rate: f64,
    pub tax_rate: f64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            hourly_rate: default_hourly_rate(),
            tax_rate: default_tax_rate(),
        }
    }
}

/// Wire shape of a single remote settings document.
#[derive(Debug, Serialize, Deserialize)]
pub struct RateDoc {
    pub rate: f64,
}
