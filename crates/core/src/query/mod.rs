// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Task queries.
//!
//! A [`TaskQuery`] holds optional, independently-set constraints. It is built
//! with by-value setters and translated into a [`FilterBuilder`] in one pass:
//!
//! ```rust,ignore
//! let query = TaskQuery::new()
//!     .status(Status::Incomplete)
//!     .project("P1")
//!     .deadline(DateFilter::before("2024-07-01"))
//!     .created_within("2w");
//! let tasks = db.tasks(&query)?;
//! ```
//!
//! Translation rules:
//!
//! - Recurring templates are always excluded.
//! - Trashed items are excluded unless `trashed(true)` asks for trash only.
//! - `context_trashed` constrains both the parent project and the project
//!   that owns the parent heading.
//! - Project membership also matches items under a heading of that project.
//! - Start date and deadline are packed dates; stop date is an epoch timestamp.
//! - A malformed recency token is an error. A malformed date literal drops
//!   its filter unless `strict_dates(true)` is set.

mod constraint;
mod view;

pub use constraint::{DateFilter, Match, Recency, RecencyUnit};
pub use view::View;

use crate::error::Result;
use crate::filter::{DateEncoding, FilterBuilder, Predicate, SqlValue};
use crate::schema;
use crate::task::{StartBucket, Status, TaskType};

/// Constraints for a task query. Unset fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskQuery {
    pub uuid: Option<String>,
    pub kind: Option<TaskType>,
    pub status: Option<Status>,
    pub start: Option<StartBucket>,
    /// Any of these start buckets; empty does not constrain.
    pub start_any: Vec<StartBucket>,
    pub area: Match,
    pub project: Match,
    pub heading: Match,
    pub tag: Match,
    pub start_date: Option<DateFilter>,
    pub stop_date: Option<DateFilter>,
    pub deadline: Option<DateFilter>,
    /// Recency token such as `3d`; validated when the query is translated.
    pub created_within: Option<String>,
    pub search: Option<String>,
    pub trashed: Option<bool>,
    pub context_trashed: Option<bool>,
    /// Order by the Today list's manual order instead of the default index.
    pub today_order: bool,
    /// Reject malformed date literals instead of dropping the filter.
    pub strict_dates: bool,
}

impl TaskQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    pub fn kind(mut self, kind: TaskType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn start(mut self, start: StartBucket) -> Self {
        self.start = Some(start);
        self
    }

    pub fn start_any(mut self, buckets: impl IntoIterator<Item = StartBucket>) -> Self {
        self.start_any = buckets.into_iter().collect();
        self
    }

    pub fn area(mut self, area: impl Into<Match>) -> Self {
        self.area = area.into();
        self
    }

    pub fn project(mut self, project: impl Into<Match>) -> Self {
        self.project = project.into();
        self
    }

    pub fn heading(mut self, heading: impl Into<Match>) -> Self {
        self.heading = heading.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<Match>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn start_date(mut self, filter: DateFilter) -> Self {
        self.start_date = Some(filter);
        self
    }

    pub fn stop_date(mut self, filter: DateFilter) -> Self {
        self.stop_date = Some(filter);
        self
    }

    pub fn deadline(mut self, filter: DateFilter) -> Self {
        self.deadline = Some(filter);
        self
    }

    pub fn created_within(mut self, token: impl Into<String>) -> Self {
        self.created_within = Some(token.into());
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn trashed(mut self, trashed: bool) -> Self {
        self.trashed = Some(trashed);
        self
    }

    pub fn context_trashed(mut self, trashed: bool) -> Self {
        self.context_trashed = Some(trashed);
        self
    }

    pub fn today_order(mut self, today_order: bool) -> Self {
        self.today_order = today_order;
        self
    }

    pub fn strict_dates(mut self, strict: bool) -> Self {
        self.strict_dates = strict;
        self
    }

    /// Translate the constraints into filters.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidParameter`] for a malformed recency token, or for
    /// a malformed date literal in strict mode.
    pub fn filters(&self) -> Result<FilterBuilder> {
        let mut filters = FilterBuilder::new();

        filters.add_static(schema::IS_NOT_RECURRING);
        filters.add_static(if self.trashed == Some(true) {
            schema::IS_TRASHED
        } else {
            schema::IS_NOT_TRASHED
        });
        // An item is trashed in context through either ancestor.
        filters
            .add_truthy(schema::PROJECT_TRASHED, self.context_trashed)
            .add_truthy(schema::PROJECT_OF_HEADING_TRASHED, self.context_trashed);

        filters.add_equal(schema::TASK_UUID, self.uuid.clone());
        if let Some(kind) = self.kind {
            filters.add_static(kind.predicate());
        }
        if let Some(status) = self.status {
            filters.add_static(status.predicate());
        }
        if let Some(start) = self.start {
            filters.add_static(start.predicate());
        }
        filters.add_or(
            self.start_any
                .iter()
                .map(|bucket| Predicate::static_sql(bucket.predicate())),
        );

        let project = SqlValue::from(&self.project);
        filters.add_or([
            Predicate::equal(schema::TASK_PROJECT, project.clone()),
            Predicate::equal(schema::PROJECT_OF_HEADING_UUID, project),
        ]);
        filters
            .add_equal(schema::TASK_AREA, &self.area)
            .add_equal(schema::TASK_HEADING, &self.heading)
            .add_equal(schema::TAG_TITLE, &self.tag);

        let dates = [
            (schema::TASK_START_DATE, DateEncoding::Packed, &self.start_date),
            (schema::TASK_STOP_DATE, DateEncoding::Epoch, &self.stop_date),
            (schema::TASK_DEADLINE, DateEncoding::Packed, &self.deadline),
        ];
        for (column, encoding, filter) in dates {
            if let Some(filter) = filter {
                let predicate =
                    Predicate::date_compare(column, filter.op, encoding, filter.value.clone());
                if let Err(e) = predicate.validate() {
                    if self.strict_dates {
                        return Err(e);
                    }
                    tracing::warn!("ignoring date filter: {e}");
                }
                filters.add(predicate);
            }
        }

        if let Some(token) = &self.created_within {
            let recency: Recency = token.parse()?;
            filters.add_static(recency.predicate());
        }

        filters.add_search(self.search.clone().unwrap_or_default());

        Ok(filters)
    }

    /// The rendered `WHERE` clause body. Never empty.
    pub fn where_clause(&self) -> Result<String> {
        let clause = self.filters()?.render();
        tracing::debug!(%clause, order = self.order_by(), "translated task query");
        Ok(clause)
    }

    /// The ordering index column.
    pub fn order_by(&self) -> &'static str {
        if self.today_order {
            schema::ORDER_TODAY_INDEX
        } else {
            schema::ORDER_INDEX
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
