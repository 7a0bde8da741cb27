use chrono::NaiveDate;

use crate::cli::commands::{open_log, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::{date, formatting, time};

/// Edit the stored session for a date: start from its fields, apply the
/// given overrides, recompute and save.
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Edit {
        date: date_str,
        start,
        end,
        had_break,
        no_break,
        rate,
    } = cmd
    {
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let mut log = open_log(cfg)?;
        let existing = log
            .find(d)
            .cloned()
            .ok_or_else(|| AppError::NoEntryForDate(date_str.clone()))?;

        let mut session = open_session(cfg, today)?;
        session.start_edit(&existing);

        if let Some(t) = time::parse_optional_time(start.as_ref())? {
            session.draft.start = Some(t);
        }
        if let Some(t) = time::parse_optional_time(end.as_ref())? {
            session.draft.end = Some(t);
        }
        if *had_break {
            session.draft.had_break = true;
        } else if *no_break {
            session.draft.had_break = false;
        }
        if let Some(r) = rate {
            session.set_hourly_rate(*r);
        }

        let entry = session.save(&mut log)?;

        success(format!(
            "Updated {}: {} → {}{} = {} h ({} gross)",
            entry.date_str(),
            time::format_time(entry.start_time),
            time::format_time(entry.end_time),
            if entry.had_break { " (break)" } else { "" },
            formatting::hours(entry.hours),
            formatting::money(&cfg.currency, entry.salary()),
        ));
    }

    Ok(())
}
