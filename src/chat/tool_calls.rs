//! Best-effort classification of assistant responses into action tags.
//!
//! The backend does not (yet) report which tools its agent invoked, so we
//! infer probable actions from the response text with keyword matching.
//! The tags drive display badges only; false positives and negatives are
//! acceptable and multiple tags may match one message. Never use these for
//! control flow.

use serde::{Deserialize, Serialize};

/// Probable backend action inferred from assistant text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToolCallTag {
    TaskCreated,
    TasksListed,
    TaskCompleted,
    TaskDeleted,
    TaskUpdated,
}

impl ToolCallTag {
    /// Human-readable badge label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TaskCreated => "Task Created",
            Self::TasksListed => "Tasks Listed",
            Self::TaskCompleted => "Task Completed",
            Self::TaskDeleted => "Task Deleted",
            Self::TaskUpdated => "Task Updated",
        }
    }
}

/// `true` if the text contains `tasks` followed by optional whitespace and
/// a colon, e.g. "Your tasks: ..." or "tasks :".
fn has_tasks_colon(lower: &str) -> bool {
    let mut rest = lower;
    while let Some(pos) = rest.find("tasks") {
        let after = &rest[pos + "tasks".len()..];
        if after.trim_start().starts_with(':') {
            return true;
        }
        rest = after;
    }
    false
}

/// Detect known action patterns in an assistant response.
pub fn parse_tool_calls(text: &str) -> Vec<ToolCallTag> {
    let lower = text.to_lowercase();
    let has = |needle: &str| lower.contains(needle);
    let mut tags = Vec::new();

    if (has("created") && has("task")) || (has("added") && has("task")) {
        tags.push(ToolCallTag::TaskCreated);
    }

    if has("here are") || has("your tasks") || has_tasks_colon(&lower) {
        tags.push(ToolCallTag::TasksListed);
    }

    if (has("completed") && has("task")) || (has("marked") && has("complete")) {
        tags.push(ToolCallTag::TaskCompleted);
    }

    if (has("deleted") && has("task")) || (has("removed") && has("task")) {
        tags.push(ToolCallTag::TaskDeleted);
    }

    if (has("updated") && has("task")) || (has("changed") && has("task")) {
        tags.push(ToolCallTag::TaskUpdated);
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_created() {
        let tags = parse_tool_calls("Task created: buy milk");
        assert!(tags.contains(&ToolCallTag::TaskCreated));
    }

    #[test]
    fn detects_listed() {
        assert!(parse_tool_calls("Here are your tasks: ...").contains(&ToolCallTag::TasksListed));
        assert!(parse_tool_calls("Your tasks are all done").contains(&ToolCallTag::TasksListed));
        assert!(parse_tool_calls("Tasks : none yet").contains(&ToolCallTag::TasksListed));
    }

    #[test]
    fn detects_completed_deleted_updated() {
        assert!(
            parse_tool_calls("I marked that as complete.").contains(&ToolCallTag::TaskCompleted)
        );
        assert!(parse_tool_calls("The task was deleted.").contains(&ToolCallTag::TaskDeleted));
        assert!(parse_tool_calls("I changed the task title.").contains(&ToolCallTag::TaskUpdated));
    }

    #[test]
    fn unrelated_text_yields_nothing() {
        assert!(parse_tool_calls("I can only help with task management.").is_empty());
        assert!(parse_tool_calls("Hello! How can I help?").is_empty());
    }

    #[test]
    fn multiple_tags_can_match() {
        let tags = parse_tool_calls("Created the task. Here are your tasks: 1. buy milk");
        assert!(tags.contains(&ToolCallTag::TaskCreated));
        assert!(tags.contains(&ToolCallTag::TasksListed));
    }

    #[test]
    fn serde_names_are_snake_case() {
        let json = serde_json::to_string(&ToolCallTag::TasksListed).unwrap();
        assert_eq!(json, "\"tasks_listed\"");
    }
}
