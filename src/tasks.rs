//! Task operations facade.
//!
//! Thin request/response shaping over the pipeline: page/size become
//! offset/limit on the wire, everything else passes through. Input
//! validation (title length and friends) belongs to the calling layer.

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::model::types::{CreateTask, Task, TaskListPage, UpdateTask};

/// Borrowed view over [`ApiClient`] exposing task CRUD.
#[derive(Debug, Clone, Copy)]
pub struct TasksApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TasksApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List tasks for the current user, one page at a time.
    ///
    /// Pages are 1-based. The backend takes offset/limit and returns a bare
    /// array, so the page's `total` is just the returned length.
    pub async fn list(&self, page: u32, page_size: u32) -> Result<TaskListPage, ClientError> {
        let page = page.max(1);
        let offset = (page - 1) * page_size;
        let tasks: Vec<Task> = self
            .client
            .get_json(
                &format!("/api/tasks?offset={offset}&limit={page_size}"),
                "fetch tasks",
            )
            .await?;
        let total = tasks.len();
        Ok(TaskListPage {
            tasks,
            total,
            page,
            page_size,
        })
    }

    /// Create a new task.
    pub async fn create(&self, data: &CreateTask) -> Result<Task, ClientError> {
        self.client
            .post_json("/api/tasks", data, "create task")
            .await
    }

    /// Apply a partial update to an existing task.
    pub async fn update(&self, id: i64, data: &UpdateTask) -> Result<Task, ClientError> {
        self.client
            .put_json(&format!("/api/tasks/{id}"), data, "update task")
            .await
    }

    /// Delete a task permanently.
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client
            .delete(&format!("/api/tasks/{id}"), "delete task")
            .await
    }

    /// Fetch a single task by id.
    pub async fn get(&self, id: i64) -> Result<Task, ClientError> {
        self.client
            .get_json(&format!("/api/tasks/{id}"), "fetch task")
            .await
    }
}
