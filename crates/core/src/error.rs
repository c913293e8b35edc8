// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for things-core operations.

use thiserror::Error;

/// All possible errors that can occur in things-core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A strict, user-facing argument was malformed.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("invalid date format: '{0}'\n  hint: dates must be written as YYYY-MM-DD")]
    InvalidFormat(String),

    #[error("task not found: {0}")]
    TaskNotFound(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for things-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
