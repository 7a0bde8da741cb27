use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory for all local data (work log, users, emulated remote).
    pub data_dir: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_hourly_rate")]
    pub default_hourly_rate: f64,
    #[serde(default = "default_tax_rate")]
    pub default_tax_rate: f64,
}

fn default_currency() -> String {
    "$".to_string()
}
pub fn default_hourly_rate() -> f64 {
    25.63
}
pub fn default_tax_rate() -> f64 {
    13.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir().to_string_lossy().to_string(),
            currency: default_currency(),
            default_hourly_rate: default_hourly_rate(),
            default_tax_rate: default_tax_rate(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".worklog")
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklog.conf")
    }

    fn default_data_dir() -> PathBuf {
        Self::config_dir()
    }

    /// Load configuration from file, or return defaults if not found.
    /// A malformed config file is an error the user has to fix by hand.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize the configuration file and the data directory.
    pub fn init_all() -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();
        fs::create_dir_all(&config.data_dir)?;

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AppError::Config(e.to_string()))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;

        Ok(config)
    }

    // --- data file layout under data_dir ---

    pub fn data_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    /// Root of the local key-value substrate (work log lives here).
    pub fn local_store_dir(&self) -> PathBuf {
        self.data_dir_path()
    }

    /// Root of the emulated per-identity remote settings substrate.
    pub fn remote_store_dir(&self) -> PathBuf {
        self.data_dir_path().join("remote")
    }

    pub fn users_file(&self) -> PathBuf {
        self.data_dir_path().join("users.json")
    }

    pub fn session_file(&self) -> PathBuf {
        self.data_dir_path().join("session.json")
    }
}
