//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against an isolated HOME
//! so they never touch the user's real data.

use std::path::Path;
use std::process::Command;

/// Run a CLI command with HOME pointed at `home`; returns
/// (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "selah-cli", "--"])
        .args(args)
        .env("HOME", home)
        .env("SELAH_ENV", "dev")
        .output()
        .expect("failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_streak_record_and_show() {
    let home = tempfile::tempdir().unwrap();

    let (stdout, stderr, code) = run_cli(home.path(), &["streak", "record"]);
    assert_eq!(code, 0, "streak record failed: {stderr}");
    assert!(stdout.contains("\"current_streak\": 1"), "got: {stdout}");

    let (stdout, _, code) = run_cli(home.path(), &["streak", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("\"engaged_today\": true"));
}

#[test]
fn test_plan_lifecycle() {
    let home = tempfile::tempdir().unwrap();

    let (_, stderr, code) = run_cli(home.path(), &["plan", "start", "week", "7"]);
    assert_eq!(code, 0, "plan start failed: {stderr}");

    // Starting the same plan again is refused.
    let (_, stderr, code) = run_cli(home.path(), &["plan", "start", "week", "7"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("already has progress"));

    let (stdout, _, code) = run_cli(home.path(), &["plan", "complete", "week", "1"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("\"current_day\": 2"));

    let (stdout, _, code) = run_cli(home.path(), &["plan", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("\"week\""));
}

#[test]
fn test_letter_seal_stays_locked() {
    let home = tempfile::tempdir().unwrap();

    let (stdout, stderr, code) =
        run_cli(home.path(), &["letter", "seal", "hello", "--delay-days", "30"]);
    assert_eq!(code, 0, "letter seal failed: {stderr}");
    let id = stdout.trim().trim_start_matches("sealed: ").to_string();

    let (stdout, _, code) = run_cli(home.path(), &["letter", "open", &id]);
    assert_eq!(code, 0); // locked is a normal outcome, not an error exit
    assert!(stdout.contains("still sealed"));

    let (stdout, _, code) = run_cli(home.path(), &["letter", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("\"days_remaining\": 30"));
}

#[test]
fn test_activity_log_and_week() {
    let home = tempfile::tempdir().unwrap();

    let (_, stderr, code) = run_cli(home.path(), &["activity", "log", "25"]);
    assert_eq!(code, 0, "activity log failed: {stderr}");

    let (stdout, _, code) = run_cli(home.path(), &["activity", "week"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("\"total_minutes\": 25"));

    // An explicit far-away reference week is empty but still 7 buckets.
    let (stdout, _, code) =
        run_cli(home.path(), &["activity", "week", "--date", "2020-01-01"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("\"total_minutes\": 0"));
}

#[test]
fn test_config_show_and_set() {
    let home = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(home.path(), &["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("timezone_offset_minutes"));

    let (_, _, code) = run_cli(
        home.path(),
        &["config", "set", "timezone_offset_minutes", "540"],
    );
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(home.path(), &["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("\"timezone_offset_minutes\": 540"));
}
