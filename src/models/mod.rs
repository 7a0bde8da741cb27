pub mod entry;
pub mod settings;

pub use entry::LogEntry;
pub use settings::UserSettings;
