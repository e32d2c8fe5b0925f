//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with a throwaway home directory and verify
//! outputs.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run a CLI command with `home` as the user's home and return output.
fn run_cli_in(home: &Path, args: &[&str], stdin: Option<&str>) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_calendarize"))
        .args(args)
        .env("HOME", home)
        .env("CALENDARIZE_ENV", "dev")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("Failed to write stdin");
        }
    }

    let output = child.wait_with_output().expect("Failed to wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn parse_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("Failed to parse JSON output")
}

const EVENTS: &str = r#"[
    {"start": "2024-03-06T09:00:00", "end": "2024-03-06T10:00:00", "status": "confirmed"},
    {"start": "2024-03-06T09:30:00", "end": "2024-03-06T11:00:00", "status": "tentative"},
    {"start": "2024-03-06T12:00:00", "end": "2024-03-06T11:00:00", "status": "broken"}
]"#;

#[test]
fn test_daily_layout_from_stdin() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, stderr) = run_cli_in(
        home.path(),
        &["daily", "--date", "2024-03-06", "--id", "today"],
        Some(EVENTS),
    );
    assert_eq!(code, 0, "daily failed: {stderr}");

    let json = parse_json(&stdout);
    assert_eq!(json["scope"], "daily");
    assert_eq!(json["calendar_id"], "today");
    assert_eq!(json["column_count"], 2);
    assert_eq!(json["placements"][1]["column"], 1);
    assert_eq!(json["diagnostics"]["excluded"][0]["index"], 2);
    assert_eq!(json["diagnostics"]["excluded"][0]["reason"], "malformed");
    assert!(stderr.contains("malformed"));
}

#[test]
fn test_weekly_layout_from_file_with_overrides() {
    let home = tempfile::tempdir().unwrap();
    let events = home.path().join("events.json");
    std::fs::write(&events, EVENTS).unwrap();

    let (code, stdout, stderr) = run_cli_in(
        home.path(),
        &[
            "weekly",
            "--date",
            "2024-03-06",
            "--events",
            events.to_str().unwrap(),
            "--week-start",
            "sunday",
            "--week-end",
            "saturday",
            "--compact",
        ],
        None,
    );
    assert_eq!(code, 0, "weekly failed: {stderr}");

    let json = parse_json(&stdout);
    assert_eq!(json["scope"], "weekly");
    assert_eq!(json["days"][0], "2024-03-03");
    assert_eq!(json["placements"][0]["column"], 3);
    assert_eq!(json["visible_row_indexes"], serde_json::json!([9]));
}

#[test]
fn test_monthly_layout() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli_in(home.path(), &["monthly", "--date", "2023-06-15"], Some("[]"));
    assert_eq!(code, 0);
    let json = parse_json(&stdout);
    assert_eq!(json["scope"], "monthly");
    assert_eq!(json["grid"]["row_count"], 5);
    assert_eq!(json["grid"]["starting_offset"], 3);
}

#[test]
fn test_invalid_unit_fails() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli_in(
        home.path(),
        &["daily", "--date", "2024-03-06", "--unit", "0"],
        Some("[]"),
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("error: Invalid unit 0"));
}

#[test]
fn test_invalid_events_fail() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli_in(
        home.path(),
        &["daily", "--date", "2024-03-06"],
        Some(r#"[{"start": "soon"}]"#),
    );
    assert_eq!(code, 1);
    assert!(stderr.starts_with("error:"));
}

#[test]
fn test_nav_monthly() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli_in(home.path(), &["nav", "monthly", "--date", "2024-01-31"], None);
    assert_eq!(code, 0);
    let json = parse_json(&stdout);
    assert_eq!(json["navigation"]["previous"], "2023-12-31");
    assert_eq!(json["navigation"]["next"], "2024-02-29");
    assert_eq!(json["query_range"]["start"], "2024-01-01T00:00:00");
    assert_eq!(json["query_range"]["end"], "2024-02-01T00:00:00");
}

#[test]
fn test_config_file_is_created_and_used() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli_in(home.path(), &["config", "path"], None);
    assert_eq!(code, 0);
    let path = stdout.trim().to_string();
    assert!(path.ends_with("calendarize-dev/config.toml"));

    let (code, stdout, _) = run_cli_in(home.path(), &["config", "show"], None);
    assert_eq!(code, 0);
    assert!(stdout.contains("unit = 60"));
    assert!(Path::new(&path).exists());

    std::fs::write(&path, "unit = 30\nday_start = 480\nday_end = 1080\n").unwrap();
    let (code, stdout, _) = run_cli_in(home.path(), &["daily", "--date", "2024-03-06"], Some("[]"));
    assert_eq!(code, 0);
    let json = parse_json(&stdout);
    assert_eq!(json["rows"].as_array().unwrap().len(), 20);
    assert_eq!(json["rows"][0]["label"], "08:00");

    let (code, stdout, _) = run_cli_in(home.path(), &["config", "validate"], None);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("ok: 30 minute rows"));

    let (code, _, _) = run_cli_in(home.path(), &["config", "reset"], None);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli_in(home.path(), &["config", "show", "--json"], None);
    assert_eq!(parse_json(&stdout)["unit"], 60);
}

#[test]
fn test_explicit_config_file() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "week_start = \"caturday\"\n").unwrap();
    let (code, _, stderr) = run_cli_in(
        home.path(),
        &["weekly", "--date", "2024-03-06", "--config", config.to_str().unwrap()],
        Some("[]"),
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("caturday"));
}
