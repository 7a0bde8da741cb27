pub mod kv;
pub mod settings;
pub mod worklog;

pub use kv::{FileKv, KvStore};
pub use settings::SettingsStore;
pub use worklog::WorkLogStore;
