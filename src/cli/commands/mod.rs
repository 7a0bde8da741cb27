pub mod account;
pub mod add;
pub mod chart;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod rate;
pub mod stats;

use chrono::NaiveDate;

use crate::auth::FileAuth;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::UserSettings;
use crate::session::Session;
use crate::store::{FileKv, SettingsStore, WorkLogStore};
use crate::ui::messages;

/// Work log on the local substrate under the configured data dir.
pub(crate) fn open_log(cfg: &Config) -> AppResult<WorkLogStore<FileKv>> {
    WorkLogStore::open(FileKv::new(cfg.local_store_dir()))
}

pub(crate) fn settings_store(cfg: &Config) -> SettingsStore<FileKv> {
    SettingsStore::new(FileKv::new(cfg.remote_store_dir()))
}

fn session_defaults(cfg: &Config) -> UserSettings {
    UserSettings {
        hourly_rate: cfg.default_hourly_rate,
        tax_rate: cfg.default_tax_rate,
    }
}

/// Establish the session for this invocation: pick up the signed-in
/// identity, then load its remote settings. A settings failure degrades to
/// defaults with a warning; local log operations stay fully functional.
pub(crate) fn open_session(cfg: &Config, today: NaiveDate) -> AppResult<Session> {
    let defaults = session_defaults(cfg);
    let mut session = Session::new(today, defaults);

    let identity = FileAuth::new(cfg).current()?;
    session.on_identity_changed(identity, defaults);

    if let Some(user) = session.user.clone() {
        let dispatched = session.begin_remote_load();
        match settings_store(cfg).load(&user.uid) {
            Ok(settings) => {
                session.apply_remote_settings(dispatched, settings);
            }
            Err(e) => messages::warning(format!("could not load settings, using defaults ({e})")),
        }
    }

    Ok(session)
}
