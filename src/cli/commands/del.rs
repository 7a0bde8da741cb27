use std::io::{self, Write};

use chrono::NaiveDate;

use crate::cli::commands::{open_log, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        yes,
    } = cmd
    {
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let mut log = open_log(cfg)?;
        if log.find(d).is_none() {
            info(format!("No session recorded for {}, nothing to delete.", d));
            return Ok(());
        }

        if !*yes
            && !ask_confirmation(&format!(
                "Delete the session for {}? This action is irreversible.",
                d
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let session = open_session(cfg, today)?;
        session.delete(&mut log, d)?;
        success(format!("Session for {} has been deleted.", d));
    }

    Ok(())
}
