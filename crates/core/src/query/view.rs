// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The vendor app's built-in lists, expressed as task queries.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::task::{StartBucket, Status, TaskType};

use super::{DateFilter, TaskQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Unsorted to-dos.
    Inbox,
    /// Anytime or scheduled to-dos whose start date has arrived.
    Today,
    /// Someday items scheduled for a future date.
    Upcoming,
    Anytime,
    /// Someday items without a start date.
    Someday,
    /// Completed and canceled items.
    Logbook,
    Trash,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Inbox,
        View::Today,
        View::Upcoming,
        View::Anytime,
        View::Someday,
        View::Logbook,
        View::Trash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Inbox => "inbox",
            View::Today => "today",
            View::Upcoming => "upcoming",
            View::Anytime => "anytime",
            View::Someday => "someday",
            View::Logbook => "logbook",
            View::Trash => "trash",
        }
    }

    /// The constraints behind this list.
    pub fn query(&self) -> TaskQuery {
        let open = TaskQuery::new().status(Status::Incomplete);
        match self {
            View::Inbox => open.kind(TaskType::Todo).start(StartBucket::Inbox),
            // Scheduled someday items join Today once their date arrives.
            View::Today => open
                .kind(TaskType::Todo)
                .start_any([StartBucket::Anytime, StartBucket::Someday])
                .start_date(DateFilter::past())
                .today_order(true),
            View::Upcoming => open
                .start(StartBucket::Someday)
                .start_date(DateFilter::future()),
            View::Anytime => open.kind(TaskType::Todo).start(StartBucket::Anytime),
            View::Someday => open
                .start(StartBucket::Someday)
                .start_date(DateFilter::not_exists()),
            View::Logbook => TaskQuery::new().stop_date(DateFilter::exists()),
            View::Trash => TaskQuery::new().trashed(true),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        View::ALL
            .into_iter()
            .find(|view| view.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "unknown view '{s}': expected inbox, today, upcoming, anytime, someday, logbook, or trash"
                ))
            })
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
