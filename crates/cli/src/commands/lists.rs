// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Area and tag catalogs.

use serde::Serialize;
use things_core::Database;

use crate::cli::OutputFormat;
use crate::display::{format_area_line, format_tag_line};
use crate::error::Result;

use super::emit;

pub fn run_areas(db: &Database, format: OutputFormat) -> Result<()> {
    emit(&render_areas(db, format)?);
    Ok(())
}

pub fn run_tags(db: &Database, format: OutputFormat) -> Result<()> {
    emit(&render_tags(db, format)?);
    Ok(())
}

pub(crate) fn render_areas(db: &Database, format: OutputFormat) -> Result<String> {
    render(&db.areas()?, format, format_area_line)
}

pub(crate) fn render_tags(db: &Database, format: OutputFormat) -> Result<String> {
    render(&db.tags()?, format, format_tag_line)
}

fn render<T: Serialize>(
    items: &[T],
    format: OutputFormat,
    line: fn(&T) -> String,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => items.iter().map(line).collect::<Vec<_>>().join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(items)?,
    })
}

#[cfg(test)]
#[path = "lists_tests.rs"]
mod tests;
