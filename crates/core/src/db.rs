// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only access to the vendor SQLite database.
//!
//! The [`Database`] struct runs [`TaskQuery`] translations against a fixed
//! SELECT template and turns rows into [`Task`] records.

use rusqlite::{Connection, OpenFlags, Row};
use std::path::Path;

use crate::dates::{decode_naive_date, decode_time, epoch_to_local, required_epoch_to_local};
use crate::error::{Error, Result};
use crate::query::TaskQuery;
use crate::schema::{FIXTURE_SCHEMA, TASK_COLUMNS, TASK_JOINS};
use crate::task::{Area, StartBucket, Status, Tag, Task, TaskType};

/// Build the full task SELECT for a query.
pub fn task_select(query: &TaskQuery) -> Result<String> {
    Ok(format!(
        "SELECT DISTINCT {TASK_COLUMNS}\n{TASK_JOINS}\nWHERE {}\nORDER BY {}",
        query.where_clause()?,
        query.order_by()
    ))
}

/// Read-only handle on the vendor database.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open the vendor database file read-only.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("database not found at {}", path.display()),
            )));
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(std::time::Duration::from_secs(5))?;
        tracing::debug!(path = %path.display(), "opened database");
        Ok(Database { conn })
    }

    /// Open an in-memory database with the tables this client reads (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(FIXTURE_SCHEMA)?;
        Ok(Database { conn })
    }

    /// All tasks matching a query, in the query's order.
    pub fn tasks(&self, query: &TaskQuery) -> Result<Vec<Task>> {
        let sql = task_select(query)?;
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], TaskRow::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        rows.into_iter().map(TaskRow::into_task).collect()
    }

    /// Number of tasks matching a query.
    pub fn count(&self, query: &TaskQuery) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM (\n{}\n)", task_select(query)?);
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        usize::try_from(count).map_err(|_| Error::CorruptedData(format!("negative count {count}")))
    }

    /// A single task by UUID, whether trashed or not.
    pub fn task(&self, uuid: &str) -> Result<Task> {
        for query in [
            TaskQuery::new().uuid(uuid),
            TaskQuery::new().uuid(uuid).trashed(true),
        ] {
            if let Some(task) = self.tasks(&query)?.into_iter().next() {
                return Ok(task);
            }
        }
        Err(Error::TaskNotFound(uuid.to_string()))
    }

    /// All areas in the app's order.
    pub fn areas(&self) -> Result<Vec<Area>> {
        let mut stmt = self
            .conn
            .prepare("SELECT uuid, title FROM TMArea ORDER BY \"index\"")?;
        let areas = stmt
            .query_map([], |row| {
                Ok(Area {
                    uuid: row.get(0)?,
                    title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(areas)
    }

    /// All tags in the app's order.
    pub fn tags(&self) -> Result<Vec<Tag>> {
        let mut stmt = self
            .conn
            .prepare("SELECT uuid, title, shortcut FROM TMTag ORDER BY \"index\"")?;
        let tags = stmt
            .query_map([], |row| {
                Ok(Tag {
                    uuid: row.get(0)?,
                    title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    shortcut: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(tags)
    }
}

/// Raw column values in [`TASK_COLUMNS`] order.
struct TaskRow {
    uuid: String,
    kind: i64,
    title: Option<String>,
    status: i64,
    notes: Option<String>,
    start: i64,
    trashed: Option<i64>,
    area: Option<String>,
    area_title: Option<String>,
    project: Option<String>,
    project_title: Option<String>,
    heading: Option<String>,
    heading_title: Option<String>,
    start_date: Option<i64>,
    deadline: Option<i64>,
    reminder_time: Option<i64>,
    stop_date: Option<f64>,
    creation_date: Option<f64>,
    modification_date: Option<f64>,
    index: Option<i64>,
    today_index: Option<i64>,
}

impl TaskRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(TaskRow {
            uuid: row.get(0)?,
            kind: row.get(1)?,
            title: row.get(2)?,
            status: row.get(3)?,
            notes: row.get(4)?,
            start: row.get(5)?,
            trashed: row.get(6)?,
            area: row.get(7)?,
            area_title: row.get(8)?,
            project: row.get(9)?,
            project_title: row.get(10)?,
            heading: row.get(11)?,
            heading_title: row.get(12)?,
            start_date: row.get(13)?,
            deadline: row.get(14)?,
            reminder_time: row.get(15)?,
            stop_date: row.get(16)?,
            creation_date: row.get(17)?,
            modification_date: row.get(18)?,
            index: row.get(19)?,
            today_index: row.get(20)?,
        })
    }

    fn into_task(self) -> Result<Task> {
        let creation = self.creation_date.unwrap_or_default();
        let created = required_epoch_to_local(creation, "creationDate").map_err(|e| match e {
            Error::InvalidParameter(reason) => {
                Error::InvalidParameter(format!("task {}: {reason}", self.uuid))
            }
            other => other,
        })?;

        Ok(Task {
            kind: TaskType::from_code(self.kind)?,
            status: Status::from_code(self.status)?,
            start: StartBucket::from_code(self.start)?,
            title: self.title.unwrap_or_default(),
            notes: self.notes.filter(|notes| !notes.is_empty()),
            trashed: self.trashed.unwrap_or_default() != 0,
            area: self.area,
            area_title: self.area_title,
            project: self.project,
            project_title: self.project_title,
            heading: self.heading,
            heading_title: self.heading_title,
            start_date: self.start_date.and_then(decode_naive_date),
            deadline: self.deadline.and_then(decode_naive_date),
            reminder_time: self
                .reminder_time
                .map(decode_time)
                .filter(|time| !time.is_empty()),
            stop_date: self.stop_date.and_then(epoch_to_local),
            created,
            modified: self.modification_date.and_then(epoch_to_local),
            index: self.index.unwrap_or_default(),
            today_index: self.today_index.unwrap_or_default(),
            uuid: self.uuid,
        })
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
