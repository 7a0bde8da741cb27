//! Unified application error type.
//! All modules (store, core, cli, auth) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid month filter: {0}")]
    InvalidMonth(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Invalid work session: {0}")]
    Validation(String),

    #[error("No entry found for date {0}")]
    NoEntryForDate(String),

    // ---------------------------
    // Identity / remote settings
    // ---------------------------
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Settings sync error: {0}")]
    RemoteSettings(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
