// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Composable SQL filters for task queries.
//!
//! A [`Predicate`] is one condition on a column that may be *empty* (built
//! from an absent input). A [`FilterBuilder`] collects predicates in order
//! and renders the non-empty ones joined with `AND`:
//!
//! ```text
//! TASK.rt1_recurrenceRule IS NULL
//! AND TASK.trashed = 0
//! AND (TASK.project = 'P' OR PROJECT_OF_HEADING.uuid = 'P')
//! ```
//!
//! With nothing to render the builder produces `TRUE`, so its output is
//! always a valid `WHERE` clause body.

mod builder;
mod predicate;

pub use builder::{FilterBuilder, MATCH_ALL};
pub use predicate::{quote, DateEncoding, DateOp, Predicate, SqlValue};
