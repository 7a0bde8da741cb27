//! worklog library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules (core arithmetic, stores, session controller, identity).

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod session;
pub mod store;
pub mod ui;
pub mod utils;

use chrono::NaiveDate;
use clap::Parser;

use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(),
        Commands::Register { .. }
        | Commands::Login { .. }
        | Commands::Logout
        | Commands::Whoami => cli::commands::account::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, today),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg, today),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg, today),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Stats => cli::commands::stats::handle(cfg, today),
        Commands::Chart => cli::commands::chart::handle(cfg),
        Commands::Rate { .. } => cli::commands::rate::handle(&cli.command, cfg, today),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once, then apply command-line overrides
    let mut cfg = Config::load()?;
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    // hidden override for deterministic date windows in tests
    let today = match &cli.today {
        Some(s) => {
            utils::date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?
        }
        None => utils::date::today(),
    };

    dispatch(&cli, &cfg, today)
}
