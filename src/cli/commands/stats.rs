use chrono::NaiveDate;

use crate::cli::commands::{open_log, open_session};
use crate::config::Config;
use crate::core::stats::two_week_summary;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting;

/// Print the trailing two-week totals. Net pay uses the session's current
/// tax rate across the whole window.
pub fn handle(cfg: &Config, today: NaiveDate) -> AppResult<()> {
    let log = open_log(cfg)?;
    let session = open_session(cfg, today)?;

    let s = two_week_summary(log.all(), today, session.tax_rate);

    header("Two-week summary");
    println!("• Total hours: {} h", formatting::hours(s.total_hours));
    println!(
        "• Gross pay:   {}",
        formatting::money(&cfg.currency, s.gross_pay)
    );
    println!(
        "• Net pay:     {} (tax {}%)",
        formatting::money(&cfg.currency, s.net_pay),
        session.tax_rate
    );

    Ok(())
}
