//! Wire entity structs for the task backend.
//!
//! Tasks are owned by the backend; this client passes them through without
//! local mutation. Shapes mirror the backend's JSON exactly.

use serde::{Deserialize, Serialize};

/// Maximum accepted task title length (backend constraint).
pub const TITLE_MAX_LENGTH: usize = 200;

/// Maximum accepted task description length (backend constraint).
pub const DESCRIPTION_MAX_LENGTH: usize = 2000;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(format!(
                "unknown status {other:?} (expected pending, in_progress, or completed)"
            )),
        }
    }
}

/// A task as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    /// Owner user id (backend enforces per-user isolation).
    pub user_id: String,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    /// ISO-8601 last-update timestamp.
    pub updated_at: String,
}

/// Body for `POST /api/tasks`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Defaults to pending server-side when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

/// Partial body for `PUT /api/tasks/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

/// One page of tasks.
///
/// The backend returns a bare array with no count, so `total` reflects only
/// the length of the returned page. Known limitation, kept visible.
#[derive(Debug, Clone)]
pub struct TaskListPage {
    pub tasks: Vec<Task>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
}
