// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;
use things_core::{Database, TaskQuery};

use crate::cli::OutputFormat;
use crate::display::format_task_line;
use crate::error::Result;

use super::emit;

#[derive(Serialize)]
struct CountOutput {
    count: usize,
}

pub fn run(db: &Database, query: &TaskQuery, count: bool, format: OutputFormat) -> Result<()> {
    emit(&render(db, query, count, format)?);
    Ok(())
}

/// Render matching tasks, or just their number when `count` is set.
pub(crate) fn render(
    db: &Database,
    query: &TaskQuery,
    count: bool,
    format: OutputFormat,
) -> Result<String> {
    if count {
        let count = db.count(query)?;
        return Ok(match format {
            OutputFormat::Text => count.to_string(),
            OutputFormat::Json => serde_json::to_string(&CountOutput { count })?,
        });
    }

    let tasks = db.tasks(query)?;
    tracing::debug!(matched = tasks.len(), "listed tasks");
    Ok(match format {
        OutputFormat::Text => tasks
            .iter()
            .map(format_task_line)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(&tasks)?,
    })
}

#[cfg(test)]
#[path = "tasks_tests.rs"]
mod tests;
