use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_session, dir_arg, setup_data_dir, wl};

#[test]
fn two_week_window_includes_the_boundary_date() {
    let dir = setup_data_dir();
    add_session(&dir, "2025-06-06"); // exactly 14 days before "today"
    add_session(&dir, "2025-06-05"); // one day older, excluded

    wl().args([
        "--data-dir",
        &dir_arg(&dir),
        "--today",
        "2025-06-20",
        "stats",
    ])
    .assert()
    .success()
    .stdout(contains("Total hours: 8.50 h"))
    .stdout(contains("Gross pay:   $170.00"));
}

#[test]
fn stats_totals_and_default_tax() {
    let dir = setup_data_dir();

    // 8.5 h at rate 20 = 170 gross
    add_session(&dir, "2025-06-18");

    // overnight with break: 7.5 h at rate 15 = 112.50 gross
    wl().args([
        "--data-dir",
        &dir_arg(&dir),
        "add",
        "2025-06-19",
        "--in",
        "22:00",
        "--out",
        "06:00",
        "--break",
        "--rate",
        "15",
    ])
    .assert()
    .success();

    wl().args([
        "--data-dir",
        &dir_arg(&dir),
        "--today",
        "2025-06-20",
        "stats",
    ])
    .assert()
    .success()
    .stdout(contains("Total hours: 16.00 h"))
    .stdout(contains("Gross pay:   $282.50"))
    .stdout(contains("(tax 13%)"));
}

#[test]
fn stats_on_empty_log() {
    let dir = setup_data_dir();

    wl().args(["--data-dir", &dir_arg(&dir), "stats"])
        .assert()
        .success()
        .stdout(contains("Total hours: 0.00 h"))
        .stdout(contains("Gross pay:   $0.00"));
}

#[test]
fn chart_draws_one_bar_per_day_oldest_first() {
    let dir = setup_data_dir();
    add_session(&dir, "2025-06-19");
    add_session(&dir, "2025-06-18");

    let out = wl()
        .args(["--data-dir", &dir_arg(&dir), "chart"])
        .assert()
        .success()
        .stdout(contains("06-18"))
        .stdout(contains("06-19"))
        .stdout(contains("$170.00"));

    let stdout = String::from_utf8(out.get_output().stdout.clone()).unwrap();
    assert!(stdout.find("06-18").unwrap() < stdout.find("06-19").unwrap());
}

#[test]
fn chart_on_empty_log() {
    let dir = setup_data_dir();

    wl().args(["--data-dir", &dir_arg(&dir), "chart"])
        .assert()
        .success()
        .stdout(contains("No sessions recorded."))
        .stdout(contains("▇").not());
}
