// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use things_core::{Area, Status, Tag, Task};

/// Maximum line width for wrapped notes (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Checkbox for a status: `[ ]` open, `[x]` completed, `[-]` canceled.
pub fn status_box(status: Status) -> &'static str {
    match status {
        Status::Incomplete => "[ ]",
        Status::Completed => "[x]",
        Status::Canceled => "[-]",
    }
}

/// Wrap text at word boundaries if it's a single line.
///
/// Multi-line content keeps the author's formatting.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// One-line summary used by list output.
pub fn format_task_line(task: &Task) -> String {
    let mut line = format!("{} {} ({})", status_box(task.status), task.title, task.uuid);
    if let Some(deadline) = task.deadline {
        line.push_str(&format!(" due {}", deadline.format("%Y-%m-%d")));
    }
    line
}

/// Labelled reference to a container: `Title (uuid)`, or the bare uuid.
fn container(uuid: &Option<String>, title: &Option<String>) -> Option<String> {
    let uuid = uuid.as_ref()?;
    Some(match title {
        Some(title) => format!("{title} ({uuid})"),
        None => uuid.clone(),
    })
}

/// Format task details for the show command.
pub fn format_task_details(task: &Task) -> String {
    let mut output = vec![
        format!("[{}] {}", task.kind, task.uuid),
        format!("Title: {}", task.title),
        format!("Status: {}", task.status),
        format!("Start: {}", task.start),
    ];
    if task.trashed {
        output.push("Trashed: yes".to_string());
    }

    let containers = [
        ("Area", container(&task.area, &task.area_title)),
        ("Project", container(&task.project, &task.project_title)),
        ("Heading", container(&task.heading, &task.heading_title)),
    ];
    for (label, value) in containers {
        if let Some(value) = value {
            output.push(format!("{label}: {value}"));
        }
    }

    if let Some(date) = task.start_date {
        output.push(format!("Start date: {}", date.format("%Y-%m-%d")));
    }
    if let Some(date) = task.deadline {
        output.push(format!("Deadline: {}", date.format("%Y-%m-%d")));
    }
    if let Some(time) = &task.reminder_time {
        output.push(format!("Reminder: {time}"));
    }
    output.push(format!("Created: {}", task.created.format(TIMESTAMP_FORMAT)));
    if let Some(modified) = task.modified {
        output.push(format!("Modified: {}", modified.format(TIMESTAMP_FORMAT)));
    }
    if let Some(stopped) = task.stop_date {
        output.push(format!("Stopped: {}", stopped.format(TIMESTAMP_FORMAT)));
    }

    if let Some(notes) = task.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        output.push(String::new());
        output.push("Notes:".to_string());
        for line in wrap_text(notes, WRAP_WIDTH).lines() {
            output.push(format!("    {line}"));
        }
    }

    output.join("\n")
}

pub fn format_area_line(area: &Area) -> String {
    format!("{} ({})", area.title, area.uuid)
}

pub fn format_tag_line(tag: &Tag) -> String {
    match &tag.shortcut {
        Some(shortcut) => format!("{} ({}) [{}]", tag.title, tag.uuid, shortcut),
        None => format!("{} ({})", tag.title, tag.uuid),
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
