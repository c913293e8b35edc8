// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! things-core: read-only query client for the Things task database.
//!
//! This crate provides the date codec, the predicate and filter machinery,
//! and the task query translation used by the `things` CLI.
//!
//! # Main Components
//!
//! - [`dates`] - Packed date/time integers and epoch timestamps
//! - [`filter`] - Possibly-empty [`Predicate`]s and the [`FilterBuilder`]
//! - [`query`] - [`TaskQuery`] constraints and their translation to SQL
//! - [`Database`] - Runs queries against the vendor SQLite file
//!
//! ```rust,ignore
//! use things_core::{Database, DateFilter, Status, TaskQuery};
//!
//! let db = Database::open(Path::new("main.sqlite"))?;
//! let overdue = db.tasks(
//!     &TaskQuery::new()
//!         .status(Status::Incomplete)
//!         .deadline(DateFilter::past()),
//! )?;
//! ```

pub mod dates;
pub mod db;
pub mod error;
pub mod filter;
pub mod query;
pub mod schema;
pub mod task;

pub use db::Database;
pub use error::{Error, Result};
pub use filter::{DateEncoding, DateOp, FilterBuilder, Predicate, SqlValue};
pub use query::{DateFilter, Match, Recency, TaskQuery, View};
pub use task::{Area, StartBucket, Status, Tag, Task, TaskType};
