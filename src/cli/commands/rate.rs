use chrono::NaiveDate;

use crate::cli::commands::{open_session, settings_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

/// Show or update the hourly and tax rates. Updates are persisted to the
/// per-identity settings store only when signed in; a persistence failure
/// is a warning, never a hard error.
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Rate { hourly, tax } = cmd {
        let mut session = open_session(cfg, today)?;

        if hourly.is_none() && tax.is_none() {
            info(format!(
                "Hourly rate: {}{:.2} | Tax: {}%",
                cfg.currency, session.hourly_rate, session.tax_rate
            ));
            return Ok(());
        }

        if let Some(t) = tax
            && !(0.0..=100.0).contains(t)
        {
            return Err(AppError::Validation(format!(
                "tax rate must be between 0 and 100, got {t}"
            )));
        }

        if let Some(h) = hourly {
            session.set_hourly_rate(*h);
        }
        if let Some(t) = tax {
            session.set_tax_rate(*t);
        }

        match session.user.clone() {
            Some(user) => {
                let mut store = settings_store(cfg);
                if let Some(h) = hourly {
                    match store.save_hourly(&user.uid, *h) {
                        Ok(()) => success(format!("Hourly rate set to {}{:.2}.", cfg.currency, h)),
                        Err(e) => warning(format!("hourly rate not synced: {e}")),
                    }
                }
                if let Some(t) = tax {
                    match store.save_tax(&user.uid, *t) {
                        Ok(()) => success(format!("Tax rate set to {t}%.")),
                        Err(e) => warning(format!("tax rate not synced: {e}")),
                    }
                }
            }
            None => warning("Not signed in: rates apply to this run only and are not saved."),
        }
    }

    Ok(())
}
