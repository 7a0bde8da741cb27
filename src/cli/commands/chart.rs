use crate::cli::commands::open_log;
use crate::config::Config;
use crate::core::stats::chart_series;
use crate::errors::AppResult;
use crate::models::LogEntry;
use crate::ui::chart;
use crate::ui::messages::{header, info};

/// Render hours per recorded day as terminal bars, oldest first.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let log = open_log(cfg)?;
    if log.is_empty() {
        info("No sessions recorded.");
        return Ok(());
    }

    let mut entries: Vec<LogEntry> = log.all().to_vec();
    entries.sort_by_key(|e| e.date);

    let series = chart_series(&entries);
    header("Hours per day");
    print!("{}", chart::render(&series, &cfg.currency));

    Ok(())
}
