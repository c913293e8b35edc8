// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use rusqlite::{params, Connection};
use things_core::dates::{encode_date, encode_time};
use things_core::schema::FIXTURE_SCHEMA;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Creation date for fixture rows: 2024-06-01T12:00:00Z.
const CREATED: f64 = 1_717_243_200.0;

/// `things` with no ambient config or database.
pub fn things(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("things");
    cmd.env("THINGS_CONFIG", temp.path().join("config.toml"))
        .env_remove("THINGS_DB")
        .env_remove("THINGS_LOG");
    cmd
}

/// `things` pointed at the fixture database through `--db`.
pub fn things_db(fixture: &Fixture) -> Command {
    let mut cmd = things(&fixture.temp);
    cmd.arg("--db").arg(&fixture.db_path);
    cmd
}

/// A temporary directory holding a small vendor database.
pub struct Fixture {
    pub temp: TempDir,
    pub db_path: PathBuf,
}

impl Fixture {
    /// Home area; project P with heading H; to-dos in several lists.
    ///
    /// - `INBOX1` inbox to-do
    /// - `ANY1` anytime to-do in P under H, tagged Errand, due 2024-06-20
    /// - `ANY2` anytime to-do in area Home, reminder 09:30
    /// - `SOME1` someday to-do without a start date
    /// - `DONE1` completed to-do stopped on 2024-06-02
    /// - `TRASH1` trashed to-do
    /// - `REPEAT1` recurring template
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("main.sqlite");
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch(FIXTURE_SCHEMA).unwrap();

        conn.execute(
            "INSERT INTO TMArea (uuid, title, \"index\") VALUES ('AREA1', 'Home', 0)",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO TMTag (uuid, title, shortcut, \"index\") VALUES ('TAG1', 'Errand', 'e', 0)",
            [],
        )
        .unwrap();

        let rows: [(&str, &str, i64, i64, i64); 9] = [
            ("P", "Renovate", 1, 0, 1),
            ("H", "Kitchen", 2, 0, 1),
            ("INBOX1", "Call plumber", 0, 0, 0),
            ("ANY1", "Buy tiles", 0, 0, 1),
            ("ANY2", "Water plants", 0, 0, 1),
            ("SOME1", "Learn Welsh", 0, 0, 2),
            ("DONE1", "Pay rent", 0, 3, 1),
            ("TRASH1", "Old idea", 0, 0, 1),
            ("REPEAT1", "Weekly review", 0, 0, 1),
        ];
        for (index, (uuid, title, kind, status, start)) in rows.into_iter().enumerate() {
            conn.execute(
                "INSERT INTO TMTask (uuid, title, type, status, start, creationDate, \"index\")
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![uuid, title, kind, status, start, CREATED, index as i64],
            )
            .unwrap();
        }

        let set = |sql: &str| {
            conn.execute(sql, []).unwrap();
        };
        set("UPDATE TMTask SET project = 'P' WHERE uuid = 'H'");
        set("UPDATE TMTask SET heading = 'H' WHERE uuid = 'ANY1'");
        set("UPDATE TMTask SET area = 'AREA1' WHERE uuid = 'ANY2'");
        set("UPDATE TMTask SET trashed = 1 WHERE uuid = 'TRASH1'");
        set("UPDATE TMTask SET rt1_recurrenceRule = x'01' WHERE uuid = 'REPEAT1'");
        set("UPDATE TMTask SET stopDate = 1717329600.0 WHERE uuid = 'DONE1'");
        conn.execute(
            "UPDATE TMTask SET deadline = ?1 WHERE uuid = 'ANY1'",
            params![encode_date(2024, 6, 20)],
        )
        .unwrap();
        conn.execute(
            "UPDATE TMTask SET reminderTime = ?1 WHERE uuid = 'ANY2'",
            params![encode_time(9, 30)],
        )
        .unwrap();
        set("INSERT INTO TMTaskTag (tasks, tags) VALUES ('ANY1', 'TAG1')");

        Self { temp, db_path }
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.temp.path().join("config.toml"), content).unwrap();
    }
}

/// Extract the `(uuid)` of each text output line.
pub fn listed_uuids(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter_map(|line| {
            let start = line.rfind('(')?;
            let end = line[start..].find(')')? + start;
            Some(line[start + 1..end].to_string())
        })
        .collect()
}
