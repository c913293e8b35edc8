// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod lists;
pub mod show;
pub mod tasks;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::Path;

use things_core::Database;

use crate::config::Config;
use crate::error::Result;

/// Open the configured database read-only.
pub fn open_db(config: &Config, flag: Option<&Path>) -> Result<Database> {
    let path = config.database_path(flag)?;
    tracing::debug!(path = %path.display(), "opening database");
    Ok(Database::open(&path)?)
}

/// Print rendered output, skipping the newline when there is nothing to show.
fn emit(output: &str) {
    if !output.is_empty() {
        println!("{output}");
    }
}
