#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use tempfile::TempDir;

pub fn wl() -> Command {
    cargo_bin_cmd!("worklog")
}

/// Fresh, isolated data directory for one test. Keep the guard alive for
/// the whole test; the directory is removed on drop.
pub fn setup_data_dir() -> TempDir {
    TempDir::new().expect("create temp data dir")
}

pub fn dir_arg(dir: &TempDir) -> String {
    dir.path().to_string_lossy().to_string()
}

/// Add a simple 09:00-17:30 session at rate 20 for the given date.
pub fn add_session(dir: &TempDir, date: &str) {
    wl().args([
        "--data-dir",
        &dir_arg(dir),
        "add",
        date,
        "--in",
        "09:00",
        "--out",
        "17:30",
        "--rate",
        "20",
    ])
    .assert()
    .success();
}
