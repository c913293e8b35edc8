// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use things_core::Database;

use crate::cli::OutputFormat;
use crate::display::format_task_details;
use crate::error::Result;

use super::emit;

pub fn run(db: &Database, uuid: &str, format: OutputFormat) -> Result<()> {
    emit(&render(db, uuid, format)?);
    Ok(())
}

pub(crate) fn render(db: &Database, uuid: &str, format: OutputFormat) -> Result<String> {
    let task = db.task(uuid)?;
    Ok(match format {
        OutputFormat::Text => format_task_details(&task),
        OutputFormat::Json => serde_json::to_string_pretty(&task)?,
    })
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
