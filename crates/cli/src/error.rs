// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the thingsrs library.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] things_core::Error),

    #[error("no database configured\n  hint: pass --db <path>, set THINGS_DB, or set 'database' in {config}")]
    DatabaseNotConfigured { config: String },

    #[error("invalid config file {path}: {reason}")]
    Config { path: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
