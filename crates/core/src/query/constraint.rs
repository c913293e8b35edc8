// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed values for individual query constraints.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::filter::{DateOp, SqlValue};
use crate::schema::TASK_CREATION_DATE;

/// A relationship constraint: a specific identifier, a presence check, or nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Match {
    #[default]
    Unset,
    /// `true`: has any value. `false`: has none.
    Bool(bool),
    Identifier(String),
}

impl Match {
    pub fn id(identifier: impl Into<String>) -> Self {
        Match::Identifier(identifier.into())
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Match::Unset)
    }
}

impl From<bool> for Match {
    fn from(value: bool) -> Self {
        Match::Bool(value)
    }
}

impl From<&str> for Match {
    fn from(value: &str) -> Self {
        Match::Identifier(value.to_string())
    }
}

impl From<String> for Match {
    fn from(value: String) -> Self {
        Match::Identifier(value)
    }
}

impl From<&Match> for SqlValue {
    fn from(value: &Match) -> Self {
        match value {
            Match::Unset => SqlValue::Absent,
            Match::Bool(b) => SqlValue::Bool(*b),
            Match::Identifier(id) => SqlValue::Text(id.clone()),
        }
    }
}

/// `true` and `false` are presence checks; anything else is an identifier.
impl FromStr for Match {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Infallible> {
        Ok(match s {
            "" => Match::Unset,
            "true" => Match::Bool(true),
            "false" => Match::Bool(false),
            other => Match::Identifier(other.to_string()),
        })
    }
}

/// A date constraint: an operator and, for comparisons, an ISO date literal.
///
/// The literal is not checked here. A malformed literal drops the filter when
/// rendered unless the query is in strict mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFilter {
    pub op: DateOp,
    pub value: String,
}

impl DateFilter {
    pub fn new(op: DateOp, value: impl Into<String>) -> Self {
        Self {
            op,
            value: value.into(),
        }
    }

    pub fn exists() -> Self {
        Self::new(DateOp::Exists, "")
    }

    pub fn not_exists() -> Self {
        Self::new(DateOp::NotExists, "")
    }

    pub fn future() -> Self {
        Self::new(DateOp::Future, "")
    }

    pub fn past() -> Self {
        Self::new(DateOp::Past, "")
    }

    pub fn on(date: impl Into<String>) -> Self {
        Self::new(DateOp::Equal, date)
    }

    pub fn before(date: impl Into<String>) -> Self {
        Self::new(DateOp::Before, date)
    }

    pub fn before_or_on(date: impl Into<String>) -> Self {
        Self::new(DateOp::BeforeOrEqual, date)
    }

    pub fn after(date: impl Into<String>) -> Self {
        Self::new(DateOp::After, date)
    }

    pub fn after_or_on(date: impl Into<String>) -> Self {
        Self::new(DateOp::AfterOrEqual, date)
    }
}

/// Parses `exists`, `none`, `future`, `past`, or an optional operator
/// (`=`, `<`, `<=`, `>`, `>=`) followed by a date.
impl FromStr for DateFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "" => {
                return Err(Error::InvalidParameter(
                    "empty date filter\n  hint: use exists, none, future, past, or <op>YYYY-MM-DD"
                        .to_string(),
                ))
            }
            "exists" | "true" => return Ok(Self::exists()),
            "none" | "false" => return Ok(Self::not_exists()),
            "future" => return Ok(Self::future()),
            "past" => return Ok(Self::past()),
            _ => {}
        }

        let (op, rest) = if let Some(rest) = s.strip_prefix("<=") {
            (DateOp::BeforeOrEqual, rest)
        } else if let Some(rest) = s.strip_prefix(">=") {
            (DateOp::AfterOrEqual, rest)
        } else if let Some(rest) = s.strip_prefix('<') {
            (DateOp::Before, rest)
        } else if let Some(rest) = s.strip_prefix('>') {
            (DateOp::After, rest)
        } else if let Some(rest) = s.strip_prefix('=') {
            (DateOp::Equal, rest)
        } else {
            (DateOp::Equal, s)
        };
        Ok(Self::new(op, rest.trim()))
    }
}

/// Unit of a [`Recency`] window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecencyUnit {
    Days,
    Weeks,
    Years,
}

/// "Created within the last N units", parsed from tokens like `3d` or `10000w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recency {
    pub amount: u32,
    pub unit: RecencyUnit,
}

impl Recency {
    /// SQLite date modifier for the start of the window.
    pub fn modifier(&self) -> String {
        let amount = u64::from(self.amount);
        match self.unit {
            RecencyUnit::Days => format!("-{amount} days"),
            RecencyUnit::Weeks => format!("-{} days", amount * 7),
            RecencyUnit::Years => format!("-{amount} years"),
        }
    }

    /// Condition matching tasks created inside the window.
    pub fn predicate(&self) -> String {
        format!(
            "datetime({TASK_CREATION_DATE}, 'unixepoch', 'localtime') > datetime('now', '{}', 'localtime')",
            self.modifier()
        )
    }
}

impl FromStr for Recency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| {
            Error::InvalidParameter(format!(
                "invalid recency '{s}': {reason}\n  hint: use <number><unit> with unit d, w, or y (e.g. 3d, 2w, 1y)"
            ))
        };

        let Some(last) = s.chars().last() else {
            return Err(invalid("empty value"));
        };
        let unit = match last {
            'd' => RecencyUnit::Days,
            'w' => RecencyUnit::Weeks,
            'y' => RecencyUnit::Years,
            _ => return Err(invalid("missing or unknown unit")),
        };

        let digits = &s[..s.len() - last.len_utf8()];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected a non-negative whole number"));
        }
        let amount = digits
            .parse()
            .map_err(|_| invalid("number is too large"))?;

        Ok(Self { amount, unit })
    }
}

impl fmt::Display for Recency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            RecencyUnit::Days => 'd',
            RecencyUnit::Weeks => 'w',
            RecencyUnit::Years => 'y',
        };
        write!(f, "{}{unit}", self.amount)
    }
}

#[cfg(test)]
#[path = "constraint_tests.rs"]
mod tests;
