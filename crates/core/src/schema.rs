// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed names and expressions from the vendor database schema.
//!
//! The schema is owned by the vendor application. Queries select from
//! `TMTask AS TASK` joined to its parent rows under fixed aliases
//! (`PROJECT`, `AREA`, `HEADING`, `PROJECT_OF_HEADING`, `TAGS`, `TAG`), and
//! every column and predicate below is written against those aliases.

// Column-level boolean expressions, one per enum value.
pub const IS_TODO: &str = "TASK.type = 0";
pub const IS_PROJECT: &str = "TASK.type = 1";
pub const IS_HEADING: &str = "TASK.type = 2";

pub const IS_INCOMPLETE: &str = "TASK.status = 0";
pub const IS_CANCELED: &str = "TASK.status = 2";
pub const IS_COMPLETED: &str = "TASK.status = 3";

pub const IS_INBOX: &str = "TASK.start = 0";
pub const IS_ANYTIME: &str = "TASK.start = 1";
pub const IS_SOMEDAY: &str = "TASK.start = 2";

pub const IS_TRASHED: &str = "TASK.trashed = 1";
pub const IS_NOT_TRASHED: &str = "TASK.trashed = 0";

pub const IS_NOT_RECURRING: &str = "TASK.rt1_recurrenceRule IS NULL";

// Columns referenced by predicates.
pub const TASK_UUID: &str = "TASK.uuid";
pub const TASK_AREA: &str = "TASK.area";
pub const TASK_PROJECT: &str = "TASK.project";
pub const TASK_HEADING: &str = "TASK.heading";
pub const TASK_TITLE: &str = "TASK.title";
pub const TASK_NOTES: &str = "TASK.notes";
pub const TASK_START_DATE: &str = "TASK.startDate";
pub const TASK_STOP_DATE: &str = "TASK.stopDate";
pub const TASK_DEADLINE: &str = "TASK.deadline";
pub const TASK_CREATION_DATE: &str = "TASK.creationDate";
pub const AREA_TITLE: &str = "AREA.title";
pub const TAG_TITLE: &str = "TAG.title";
pub const PROJECT_TRASHED: &str = "PROJECT.trashed";
pub const PROJECT_OF_HEADING_UUID: &str = "PROJECT_OF_HEADING.uuid";
pub const PROJECT_OF_HEADING_TRASHED: &str = "PROJECT_OF_HEADING.trashed";

/// Columns matched by a free-text search when none are given.
pub const SEARCH_COLUMNS: [&str; 3] = [TASK_TITLE, TASK_NOTES, AREA_TITLE];

/// Ordering indexes. The vendor keeps a separate manual order for Today.
pub const ORDER_INDEX: &str = "TASK.\"index\"";
pub const ORDER_TODAY_INDEX: &str = "TASK.todayIndex";

/// Task columns in the order [`crate::db`] reads them.
pub const TASK_COLUMNS: &str = r#"TASK.uuid, TASK.type, TASK.title, TASK.status, TASK.notes,
    TASK.start, TASK.trashed, TASK.area, AREA.title, TASK.project, PROJECT.title,
    TASK.heading, HEADING.title, TASK.startDate, TASK.deadline, TASK.reminderTime,
    TASK.stopDate, TASK.creationDate, TASK.userModificationDate, TASK."index",
    TASK.todayIndex"#;

/// Joins that bring every alias used by predicates into scope.
pub const TASK_JOINS: &str = r#"FROM TMTask AS TASK
LEFT OUTER JOIN TMTask PROJECT ON TASK.project = PROJECT.uuid
LEFT OUTER JOIN TMArea AREA ON TASK.area = AREA.uuid
LEFT OUTER JOIN TMTask HEADING ON TASK.heading = HEADING.uuid
LEFT OUTER JOIN TMTask PROJECT_OF_HEADING ON HEADING.project = PROJECT_OF_HEADING.uuid
LEFT OUTER JOIN TMTaskTag TAGS ON TASK.uuid = TAGS.tasks
LEFT OUTER JOIN TMTag TAG ON TAGS.tags = TAG.uuid"#;

/// The subset of the vendor schema this client reads.
///
/// Used to build in-memory and fixture databases; a real vendor file already
/// contains these tables (with many more columns).
pub const FIXTURE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS TMTask (
    uuid TEXT PRIMARY KEY,
    type INTEGER NOT NULL DEFAULT 0,
    title TEXT,
    notes TEXT,
    status INTEGER NOT NULL DEFAULT 0,
    start INTEGER NOT NULL DEFAULT 0,
    trashed INTEGER NOT NULL DEFAULT 0,
    area TEXT,
    project TEXT,
    heading TEXT,
    startDate INTEGER,
    deadline INTEGER,
    reminderTime INTEGER,
    stopDate REAL,
    creationDate REAL,
    userModificationDate REAL,
    "index" INTEGER NOT NULL DEFAULT 0,
    todayIndex INTEGER NOT NULL DEFAULT 0,
    rt1_recurrenceRule BLOB
);

CREATE TABLE IF NOT EXISTS TMArea (
    uuid TEXT PRIMARY KEY,
    title TEXT,
    visible INTEGER,
    "index" INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS TMTag (
    uuid TEXT PRIMARY KEY,
    title TEXT,
    shortcut TEXT,
    parent TEXT,
    "index" INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS TMTaskTag (
    tasks TEXT NOT NULL,
    tags TEXT NOT NULL
);
"#;
