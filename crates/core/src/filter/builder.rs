// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered accumulation of predicates rendered as a conjunction.

use crate::error::Result;

use super::predicate::{DateEncoding, DateOp, Predicate, SqlValue};

/// Rendering of a filter with no surviving predicates.
pub const MATCH_ALL: &str = "TRUE";

/// Collects predicates for one query and renders them joined with `AND`.
///
/// Built once per query, rendered (possibly more than once), then dropped.
/// Rendering does not mutate the builder, so repeated renders are identical.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterBuilder {
    predicates: Vec<Predicate>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, predicate: Predicate) -> &mut Self {
        self.predicates.push(predicate);
        self
    }

    pub fn add_static(&mut self, text: impl Into<String>) -> &mut Self {
        self.add(Predicate::static_sql(text))
    }

    pub fn add_equal(
        &mut self,
        column: impl Into<String>,
        value: impl Into<SqlValue>,
    ) -> &mut Self {
        self.add(Predicate::equal(column, value))
    }

    pub fn add_truthy(&mut self, column: impl Into<String>, value: Option<bool>) -> &mut Self {
        self.add(Predicate::truthy(column, value))
    }

    pub fn add_or(&mut self, members: impl IntoIterator<Item = Predicate>) -> &mut Self {
        self.add(Predicate::or(members))
    }

    pub fn add_search(&mut self, query: impl Into<String>) -> &mut Self {
        self.add(Predicate::search(query))
    }

    pub fn add_date_compare(
        &mut self,
        column: impl Into<String>,
        op: DateOp,
        encoding: DateEncoding,
        value: impl Into<String>,
    ) -> &mut Self {
        self.add(Predicate::date_compare(column, op, encoding, value))
    }

    /// All predicates added so far, including empty ones.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Render the conjunction of every predicate that produces SQL.
    ///
    /// Never returns an empty string: with nothing to render the result is
    /// [`MATCH_ALL`].
    pub fn render(&self) -> String {
        let parts: Vec<String> = self
            .predicates
            .iter()
            .filter_map(|predicate| {
                let sql = predicate.sql();
                if sql.is_empty() {
                    if !predicate.is_empty() {
                        tracing::trace!(?predicate, "dropping predicate that renders no SQL");
                    }
                    None
                } else {
                    Some(sql)
                }
            })
            .collect();

        if parts.is_empty() {
            MATCH_ALL.to_string()
        } else {
            parts.join("\nAND ")
        }
    }

    /// Fail on any predicate that [`render`](Self::render) would silently drop.
    pub fn validate(&self) -> Result<()> {
        self.predicates.iter().try_for_each(Predicate::validate)
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
