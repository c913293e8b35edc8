// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Task types read from the vendor database.
//!
//! This module contains the record types ([`Task`], [`Area`], [`Tag`]) and
//! the enums behind the vendor's integer codes.

use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::schema;

/// What kind of item a `TMTask` row is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Todo,
    Project,
    /// A section inside a project.
    Heading,
}

impl TaskType {
    /// Returns the string representation used in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Todo => "to-do",
            TaskType::Project => "project",
            TaskType::Heading => "heading",
        }
    }

    /// Decode the integer stored in `TMTask.type`.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(TaskType::Todo),
            1 => Ok(TaskType::Project),
            2 => Ok(TaskType::Heading),
            _ => Err(Error::CorruptedData(format!("unknown task type code {code}"))),
        }
    }

    /// The fixed filter selecting this type.
    pub fn predicate(&self) -> &'static str {
        match self {
            TaskType::Todo => schema::IS_TODO,
            TaskType::Project => schema::IS_PROJECT,
            TaskType::Heading => schema::IS_HEADING,
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "to-do" | "todo" => Ok(TaskType::Todo),
            "project" => Ok(TaskType::Project),
            "heading" => Ok(TaskType::Heading),
            _ => Err(Error::InvalidParameter(format!(
                "unknown task type '{s}': expected to-do, project, or heading"
            ))),
        }
    }
}

/// Completion state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Incomplete,
    Canceled,
    Completed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Incomplete => "incomplete",
            Status::Canceled => "canceled",
            Status::Completed => "completed",
        }
    }

    /// Decode the integer stored in `TMTask.status`.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Status::Incomplete),
            2 => Ok(Status::Canceled),
            3 => Ok(Status::Completed),
            _ => Err(Error::CorruptedData(format!("unknown status code {code}"))),
        }
    }

    pub fn predicate(&self) -> &'static str {
        match self {
            Status::Incomplete => schema::IS_INCOMPLETE,
            Status::Canceled => schema::IS_CANCELED,
            Status::Completed => schema::IS_COMPLETED,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "incomplete" | "open" => Ok(Status::Incomplete),
            "canceled" | "cancelled" => Ok(Status::Canceled),
            "completed" | "done" => Ok(Status::Completed),
            _ => Err(Error::InvalidParameter(format!(
                "unknown status '{s}': expected incomplete, completed, or canceled"
            ))),
        }
    }
}

/// Scheduling bucket (`TMTask.start`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StartBucket {
    Inbox,
    Anytime,
    Someday,
}

impl StartBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            StartBucket::Inbox => "inbox",
            StartBucket::Anytime => "anytime",
            StartBucket::Someday => "someday",
        }
    }

    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(StartBucket::Inbox),
            1 => Ok(StartBucket::Anytime),
            2 => Ok(StartBucket::Someday),
            _ => Err(Error::CorruptedData(format!("unknown start code {code}"))),
        }
    }

    pub fn predicate(&self) -> &'static str {
        match self {
            StartBucket::Inbox => schema::IS_INBOX,
            StartBucket::Anytime => schema::IS_ANYTIME,
            StartBucket::Someday => schema::IS_SOMEDAY,
        }
    }
}

impl fmt::Display for StartBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StartBucket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "inbox" => Ok(StartBucket::Inbox),
            "anytime" => Ok(StartBucket::Anytime),
            "someday" => Ok(StartBucket::Someday),
            _ => Err(Error::InvalidParameter(format!(
                "unknown start '{s}': expected inbox, anytime, or someday"
            ))),
        }
    }
}

/// A to-do, project, or heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub uuid: String,
    #[serde(rename = "type")]
    pub kind: TaskType,
    pub title: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub start: StartBucket,
    pub trashed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    /// Reminder as `HH:MM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
    /// When the task was completed or canceled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_date: Option<DateTime<Local>>,
    pub created: DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Local>>,
    pub index: i64,
    pub today_index: i64,
}

/// An area of responsibility grouping projects and to-dos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub uuid: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub uuid: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
