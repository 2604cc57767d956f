//! Terminal rendering helpers for the CLI.

use colored::Colorize;

use crate::chat::ToolCallTag;
use crate::model::types::{Task, TaskStatus};

/// Single-character status marker.
pub fn status_glyph(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "·",
        TaskStatus::InProgress => "›",
        TaskStatus::Completed => "✓",
    }
}

/// One task as a terminal row.
pub fn task_row(task: &Task) -> String {
    let glyph = match task.status {
        TaskStatus::Pending => status_glyph(task.status).normal(),
        TaskStatus::InProgress => status_glyph(task.status).yellow(),
        TaskStatus::Completed => status_glyph(task.status).green(),
    };
    let mut row = format!("{:>5}  {} {}", task.id, glyph, task.title);
    if let Some(desc) = task.description.as_deref()
        && !desc.is_empty()
    {
        row.push_str(&format!("\n       {}", desc.dimmed()));
    }
    row
}

/// Full task detail block.
pub fn task_detail(task: &Task) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}  {}\n", "id:".dimmed(), task.id));
    out.push_str(&format!("{}  {}\n", "title:".dimmed(), task.title));
    out.push_str(&format!(
        "{}  {}\n",
        "status:".dimmed(),
        task.status.to_string()
    ));
    if let Some(desc) = task.description.as_deref() {
        out.push_str(&format!("{}  {}\n", "description:".dimmed(), desc));
    }
    out.push_str(&format!("{}  {}\n", "created:".dimmed(), task.created_at));
    out.push_str(&format!("{}  {}", "updated:".dimmed(), task.updated_at));
    out
}

/// Bracketed badges for detected assistant actions.
pub fn tool_call_badges(tags: &[ToolCallTag]) -> String {
    tags.iter()
        .map(|t| format!("[{}]", t.label()).cyan().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
