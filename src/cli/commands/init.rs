use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create the configuration file and the data directory.
pub fn handle() -> AppResult<()> {
    let cfg = Config::init_all()?;

    success(format!("Config file: {}", Config::config_file().display()));
    success(format!("Data dir:    {}", cfg.data_dir));
    Ok(())
}
