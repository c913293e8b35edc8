// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Task constraint flags shared by query commands.

use clap::Args;
use things_core::{DateFilter, Match, StartBucket, Status, TaskQuery, TaskType};

use super::parse_core;

/// `true`/`false` check presence; any other value is an identifier.
fn parse_match(s: &str) -> Result<Match, String> {
    if s.trim().is_empty() {
        return Err("cannot be empty".to_string());
    }
    s.parse().map_err(|e: std::convert::Infallible| e.to_string())
}

/// One flag per task constraint.
#[derive(Args, Clone, Debug, Default)]
pub struct TaskArgs {
    /// Match a single task by uuid
    #[arg(long)]
    pub uuid: Option<String>,

    /// Item type (to-do, project, heading)
    #[arg(long, short = 't', value_parser = parse_core::<TaskType>)]
    pub r#type: Option<TaskType>,

    /// Status (incomplete, canceled, completed)
    #[arg(long, short, value_parser = parse_core::<Status>)]
    pub status: Option<Status>,

    /// Start bucket (inbox, anytime, someday)
    #[arg(long, value_parser = parse_core::<StartBucket>)]
    pub start: Option<StartBucket>,

    /// Area uuid, or true/false for any/no area
    #[arg(long, short, value_parser = parse_match)]
    pub area: Option<Match>,

    /// Project uuid, direct or via heading; true/false checks either link for presence
    #[arg(long, short, value_parser = parse_match)]
    pub project: Option<Match>,

    /// Heading uuid, or true/false
    #[arg(long, value_parser = parse_match)]
    pub heading: Option<Match>,

    /// Tag title, or true/false for any/no tag
    #[arg(long, value_parser = parse_match)]
    pub tag: Option<Match>,

    /// Start date: exists, none, future, past, or [op]YYYY-MM-DD
    #[arg(long, value_name = "FILTER", value_parser = parse_core::<DateFilter>)]
    pub start_date: Option<DateFilter>,

    /// Completion date: exists, none, future, past, or [op]YYYY-MM-DD
    #[arg(long, value_name = "FILTER", value_parser = parse_core::<DateFilter>)]
    pub stop_date: Option<DateFilter>,

    /// Deadline: exists, none, future, past, or [op]YYYY-MM-DD
    #[arg(long, value_name = "FILTER", value_parser = parse_core::<DateFilter>)]
    pub deadline: Option<DateFilter>,

    /// Created within a window such as 3d, 2w, or 1y
    #[arg(long, value_name = "WINDOW")]
    pub created_within: Option<String>,

    /// Case-insensitive text search over title, notes, and area title
    #[arg(long, short = 'q')]
    pub search: Option<String>,

    /// Select trashed (true) or untrashed (false) items
    #[arg(long, value_name = "BOOL")]
    pub trashed: Option<bool>,

    /// true: both the project and the heading's project are trashed; false: neither is
    #[arg(long, value_name = "BOOL")]
    pub context_trashed: Option<bool>,

    /// Order by the Today list position
    #[arg(long)]
    pub today_order: bool,
}

impl TaskArgs {
    /// Build the core query. `strict_dates` comes from the flag or config.
    pub fn into_query(self, strict_dates: bool) -> TaskQuery {
        let mut query = TaskQuery::new()
            .today_order(self.today_order)
            .strict_dates(strict_dates);
        query.uuid = self.uuid;
        query.kind = self.r#type;
        query.status = self.status;
        query.start = self.start;
        query.area = self.area.unwrap_or_default();
        query.project = self.project.unwrap_or_default();
        query.heading = self.heading.unwrap_or_default();
        query.tag = self.tag.unwrap_or_default();
        query.start_date = self.start_date;
        query.stop_date = self.stop_date;
        query.deadline = self.deadline;
        query.created_within = self.created_within;
        query.search = self.search;
        query.trashed = self.trashed;
        query.context_trashed = self.context_trashed;
        query
    }
}
