use chrono::NaiveDate;

use crate::cli::commands::{open_log, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::session::Draft;
use crate::ui::messages::success;
use crate::utils::{date, formatting, time};

/// Save a work session for a date, replacing any existing one.
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Add {
        date: date_str,
        start,
        end,
        had_break,
        rate,
        tax,
    } = cmd
    {
        //
        // 1. Resolve date (default today)
        //
        let d = match date_str {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => today,
        };

        //
        // 2. Establish session, apply per-invocation rate overrides
        //
        let mut session = open_session(cfg, today)?;
        session.selected_date = d;
        if let Some(r) = rate {
            session.set_hourly_rate(*r);
        }
        if let Some(t) = tax {
            session.set_tax_rate(*t);
        }

        //
        // 3. Fill the draft and save
        //
        session.draft = Draft {
            start: time::parse_optional_time(start.as_ref())?,
            end: time::parse_optional_time(end.as_ref())?,
            had_break: *had_break,
        };

        let mut log = open_log(cfg)?;
        let entry = session.save(&mut log)?;

        success(format!(
            "Saved {}: {} → {}{} = {} h ({} gross)",
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
