use crate::cli::commands::open_log;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::month_filter;
use crate::errors::AppResult;
use crate::models::LogEntry;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};
use crate::utils::{date, formatting, time};

/// List recorded sessions, newest first, optionally filtered to a month.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let log = open_log(cfg)?;

        let mut entries: Vec<LogEntry> = match month {
            Some(m) => {
                let (year, month) = date::parse_month(m)?;
                month_filter(log.all(), year, month)
            }
            None => log.all().to_vec(),
        };

        if entries.is_empty() {
            info("No sessions recorded.");
            return Ok(());
        }

        // newest first, a display concern
        entries.sort_by(|a, b| b.date.cmp(&a.date));

        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("Start", 5),
            Column::new("End", 5),
            Column::new("Break", 5),
            Column::new("Hours", 6),
            Column::new("Rate", 8),
            Column::new("Gross", 10),
        ]);

        for e in &entries {
            table.add_row(vec![
                e.date_str(),
                time::format_time(e.start_time),
                time::format_time(e.end_time),
                if e.had_break { "30m" } else { "-" }.to_string(),
                formatting::hours(e.hours),
                formatting::money(&cfg.currency, e.rate),
                formatting::money(&cfg.currency, e.salary()),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
