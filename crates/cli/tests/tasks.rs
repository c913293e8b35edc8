// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;
use yare::parameterized;

fn uuids_for(fixture: &Fixture, args: &[&str]) -> Vec<String> {
    let output = things_db(fixture).arg("tasks").args(args).output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    listed_uuids(&output.stdout)
}

#[test]
fn default_excludes_trashed_and_recurring() {
    let fixture = Fixture::new();
    assert_eq!(
        uuids_for(&fixture, &[]),
        ["P", "H", "INBOX1", "ANY1", "ANY2", "SOME1", "DONE1"]
    );
}

#[parameterized(
    project_through_heading = { &["--project", "P"], &["H", "ANY1"] },
    tag = { &["--tag", "Errand"], &["ANY1"] },
    any_area = { &["--area", "true"], &["ANY2"] },
    specific_area = { &["--area", "AREA1"], &["ANY2"] },
    headings = { &["-t", "heading"], &["H"] },
    completed = { &["--status", "completed"], &["DONE1"] },
    deadline_before = { &["--deadline", "<2024-07-01"], &["ANY1"] },
    deadline_on = { &["--deadline", "2024-06-20"], &["ANY1"] },
    stopped_since = { &["--stop-date", ">=2024-06-01"], &["DONE1"] },
    search = { &["-q", "plumb"], &["INBOX1"] },
    trashed = { &["--trashed", "true"], &["TRASH1"] },
    uuid = { &["--uuid", "SOME1"], &["SOME1"] },
)]
fn filters(args: &[&str], expected: &[&str]) {
    let fixture = Fixture::new();
    assert_eq!(uuids_for(&fixture, args), expected);
}

#[test]
fn constraints_combine_with_and() {
    let fixture = Fixture::new();
    assert_eq!(
        uuids_for(&fixture, &["--start", "anytime", "--status", "incomplete", "-t", "to-do"]),
        ["ANY1", "ANY2"]
    );
}

#[test]
fn text_line_shows_due_date() {
    let fixture = Fixture::new();
    things_db(&fixture)
        .args(["tasks", "--tag", "Errand"])
        .assert()
        .success()
        .stdout("[ ] Buy tiles (ANY1) due 2024-06-20\n");
}

#[test]
fn count_text_and_json() {
    let fixture = Fixture::new();
    things_db(&fixture)
        .args(["tasks", "--count"])
        .assert()
        .success()
        .stdout("7\n");
    things_db(&fixture)
        .args(["tasks", "--count", "--start", "anytime", "-o", "json"])
        .assert()
        .success()
        .stdout("{\"count\":5}\n");
}

#[test]
fn json_output_is_an_array() {
    let fixture = Fixture::new();
    let output = things_db(&fixture)
        .args(["tasks", "--area", "AREA1", "-o", "json"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["uuid"], "ANY2");
    assert_eq!(value[0]["area_title"], "Home");
    assert_eq!(value[0]["reminder_time"], "09:30");
}

#[test]
fn created_within_window() {
    let fixture = Fixture::new();
    things_db(&fixture)
        .args(["tasks", "--created-within", "1d", "--count"])
        .assert()
        .success()
        .stdout("0\n");
    things_db(&fixture)
        .args(["tasks", "--created-within", "100y", "--count"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn malformed_recency_fails() {
    let fixture = Fixture::new();
    things_db(&fixture)
        .args(["tasks", "--created-within", "3x"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: invalid parameter"));
}

#[test]
fn malformed_date_ignored_by_default() {
    let fixture = Fixture::new();
    things_db(&fixture)
        .args(["tasks", "--deadline", "2024-02-30", "--count"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn malformed_date_fails_when_strict() {
    let fixture = Fixture::new();
    things_db(&fixture)
        .args(["tasks", "--deadline", "2024-02-30", "--strict-dates"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2024-02-30"));
}

#[test]
fn unknown_status_is_usage_error() {
    let fixture = Fixture::new();
    things_db(&fixture)
        .args(["tasks", "--status", "doing"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown status"));
}
