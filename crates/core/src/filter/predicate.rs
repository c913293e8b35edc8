// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single SQL conditions that may be empty.
//!
//! A [`Predicate`] built from an absent input is *empty*: it renders as `""`
//! and contributes nothing when combined with others.

use std::fmt;

use crate::dates::{current_date_as_packed_sql, encode_naive_date, parse_iso_naive};
use crate::error::{Error, Result};
use crate::schema::SEARCH_COLUMNS;

/// A value compared by [`Predicate::Equal`].
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// No value; the predicate is empty.
    Absent,
    /// Presence check: `true` is `IS NOT NULL`, `false` is `IS NULL`.
    Bool(bool),
    Text(String),
    Number(i64),
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Number(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Absent, Into::into)
    }
}

/// Comparison performed by [`Predicate::DateCompare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOp {
    Exists,
    NotExists,
    Equal,
    Before,
    BeforeOrEqual,
    After,
    AfterOrEqual,
    /// Strictly after today (local time).
    Future,
    /// Today or earlier (local time).
    Past,
}

impl DateOp {
    /// Whether this operator compares against a literal date.
    pub fn takes_value(&self) -> bool {
        matches!(
            self,
            DateOp::Equal
                | DateOp::Before
                | DateOp::BeforeOrEqual
                | DateOp::After
                | DateOp::AfterOrEqual
        )
    }

    fn symbol(&self) -> &'static str {
        match self {
            DateOp::Equal => "=",
            DateOp::Before => "<",
            DateOp::BeforeOrEqual => "<=",
            DateOp::After | DateOp::Future => ">",
            DateOp::AfterOrEqual => ">=",
            DateOp::Past => "<=",
            DateOp::Exists | DateOp::NotExists => "",
        }
    }
}

/// How a date column is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateEncoding {
    /// Packed calendar date integer (`startDate`, `deadline`).
    Packed,
    /// Float seconds since the Unix epoch (`stopDate`, `creationDate`).
    Epoch,
}

/// A possibly-empty boolean condition on the task query.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Fixed SQL text, used verbatim.
    Static(String),
    /// Column equals a value, or presence check for booleans.
    Equal { column: String, value: SqlValue },
    /// Column is truthy (`Some(true)`) or falsy with NULL as false (`Some(false)`).
    Truthy { column: String, value: Option<bool> },
    /// Substring match of `query` against any of `columns`.
    Search { query: String, columns: Vec<String> },
    /// Date comparison; `encoding` selects how `column` is stored.
    DateCompare {
        column: String,
        op: DateOp,
        encoding: DateEncoding,
        value: String,
    },
    /// Disjunction of the non-empty members.
    Or(Vec<Predicate>),
}

impl Predicate {
    pub fn static_sql(text: impl Into<String>) -> Self {
        Predicate::Static(text.into())
    }

    pub fn equal(column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        Predicate::Equal {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn truthy(column: impl Into<String>, value: Option<bool>) -> Self {
        Predicate::Truthy {
            column: column.into(),
            value,
        }
    }

    /// Search the default columns: task title, notes, and area title.
    pub fn search(query: impl Into<String>) -> Self {
        Self::search_in(query, SEARCH_COLUMNS)
    }

    pub fn search_in<I, S>(query: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::Search {
            query: query.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn date_compare(
        column: impl Into<String>,
        op: DateOp,
        encoding: DateEncoding,
        value: impl Into<String>,
    ) -> Self {
        Predicate::DateCompare {
            column: column.into(),
            op,
            encoding,
            value: value.into(),
        }
    }

    pub fn or(members: impl IntoIterator<Item = Predicate>) -> Self {
        Predicate::Or(members.into_iter().collect())
    }

    /// True when built from an absent or blank input.
    pub fn is_empty(&self) -> bool {
        match self {
            Predicate::Static(text) => text.is_empty(),
            Predicate::Equal { value, .. } => *value == SqlValue::Absent,
            Predicate::Truthy { value, .. } => value.is_none(),
            Predicate::Search { query, .. } => query.is_empty(),
            Predicate::DateCompare { op, value, .. } => op.takes_value() && value.trim().is_empty(),
            Predicate::Or(members) => members.iter().all(Predicate::is_empty),
        }
    }

    /// Render as SQL, or `""` when empty.
    ///
    /// A date comparison with a malformed literal is not empty but still
    /// renders `""`; such a filter is dropped.
    pub fn sql(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        match self {
            Predicate::Static(text) => text.clone(),
            Predicate::Equal { column, value } => match value {
                SqlValue::Absent => String::new(),
                SqlValue::Bool(true) => format!("{column} IS NOT NULL"),
                SqlValue::Bool(false) => format!("{column} IS NULL"),
                SqlValue::Text(text) => format!("{column} = {}", quote(text)),
                SqlValue::Number(n) => format!("{column} = {n}"),
            },
            Predicate::Truthy { column, value } => match value {
                Some(true) => column.clone(),
                Some(false) => format!("NOT IFNULL({column}, 0)"),
                None => String::new(),
            },
            Predicate::Search { query, columns } => {
                // `%` and `_` in the query are left as wildcards.
                let pattern = quote(&format!("%{query}%"));
                let clauses: Vec<String> = columns
                    .iter()
                    .map(|column| format!("{column} LIKE {pattern}"))
                    .collect();
                if clauses.is_empty() {
                    String::new()
                } else {
                    format!("({})", clauses.join(" OR "))
                }
            }
            Predicate::DateCompare {
                column,
                op,
                encoding,
                value,
            } => render_date_compare(column, *op, *encoding, value).unwrap_or_default(),
            Predicate::Or(members) => {
                let parts: Vec<String> = members
                    .iter()
                    .map(Predicate::sql)
                    .filter(|sql| !sql.is_empty())
                    .collect();
                if parts.is_empty() {
                    String::new()
                } else {
                    format!("({})", parts.join(" OR "))
                }
            }
        }
    }

    /// Check for inputs that would be silently dropped when rendering.
    ///
    /// Only malformed date literals fail; everything else is valid.
    pub fn validate(&self) -> Result<()> {
        match self {
            Predicate::DateCompare {
                column,
                op,
                encoding,
                value,
            } if !self.is_empty() => {
                if render_date_compare(column, *op, *encoding, value).is_none() {
                    return Err(Error::InvalidParameter(format!(
                        "invalid date '{value}' for {column}: expected YYYY-MM-DD"
                    )));
                }
                Ok(())
            }
            Predicate::Or(members) => members.iter().try_for_each(Predicate::validate),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql())
    }
}

/// Quote a string literal, doubling embedded single quotes.
pub fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

fn render_date_compare(
    column: &str,
    op: DateOp,
    encoding: DateEncoding,
    value: &str,
) -> Option<String> {
    match op {
        DateOp::Exists => return Some(format!("{column} IS NOT NULL")),
        DateOp::NotExists => return Some(format!("{column} IS NULL")),
        _ => {}
    }

    let symbol = op.symbol();
    match encoding {
        DateEncoding::Packed => {
            let rhs = if matches!(op, DateOp::Future | DateOp::Past) {
                current_date_as_packed_sql().to_string()
            } else {
                encode_naive_date(parse_iso_naive(value.trim())?).to_string()
            };
            Some(format!("{column} {symbol} {rhs}"))
        }
        DateEncoding::Epoch => {
            let rhs = if matches!(op, DateOp::Future | DateOp::Past) {
                "date('now', 'localtime')".to_string()
            } else {
                let date = parse_iso_naive(value.trim())?;
                format!("date('{}')", date.format("%Y-%m-%d"))
            };
            Some(format!(
                "date({column}, 'unixepoch', 'localtime') {symbol} {rhs}"
            ))
        }
    }
}

#[cfg(test)]
#[path = "predicate_tests.rs"]
mod tests;
