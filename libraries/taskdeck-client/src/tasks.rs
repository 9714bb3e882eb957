//! Task CRUD endpoints.

use crate::error::Result;
use crate::response::{ensure_success, read_json};
use crate::types::{CreateTaskRequest, Task, UpdateTaskRequest};
use reqwest::{Client, RequestBuilder};
use tracing::debug;

/// Task client for a Taskdeck server.
///
/// The bearer token is attached when present. Without one the server
/// decides, which for every task endpoint means a 401.
pub struct TaskClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    access_token: Option<&'a str>,
}

impl<'a> TaskClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, access_token: Option<&'a str>) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Get every task owned by the current user.
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let url = format!("{}/api/v1/todos", self.base_url);
        debug!(url = %url, "Fetching tasks");

        let response = self.authorize(self.http.get(&url)).send().await?;
        let tasks: Vec<Task> = read_json(response, "task list").await?;

        debug!(count = tasks.len(), "Fetched tasks");
        Ok(tasks)
    }

    /// Get a single task by ID.
    pub async fn get_task(&self, id: i64) -> Result<Task> {
        let url = format!("{}/api/v1/todos/{}", self.base_url, id);
        debug!(url = %url, task_id = id, "Fetching task");

        let response = self.authorize(self.http.get(&url)).send().await?;
        read_json(response, "task").await
    }

    /// Create a task.
    pub async fn create_task(&self, request: &CreateTaskRequest) -> Result<Task> {
        let url = format!("{}/api/v1/todos", self.base_url);
        debug!(url = %url, "Creating task");

        let response = self
            .authorize(self.http.post(&url))
            .json(request)
            .send()
            .await?;
        let task: Task = read_json(response, "created task").await?;

        debug!(task_id = task.id, "Task created");
        Ok(task)
    }

    /// Apply a partial update to a task.
    pub async fn update_task(&self, id: i64, request: &UpdateTaskRequest) -> Result<Task> {
        let url = format!("{}/api/v1/todos/{}", self.base_url, id);
        debug!(url = %url, task_id = id, "Updating task");

        let response = self
            .authorize(self.http.put(&url))
            .json(request)
            .send()
            .await?;
        read_json(response, "updated task").await
    }

    /// Delete a task.
    ///
    /// A 404 is reported as an error rather than treated as done.
    pub async fn delete_task(&self, id: i64) -> Result<()> {
        let url = format!("{}/api/v1/todos/{}", self.base_url, id);
        debug!(url = %url, task_id = id, "Deleting task");

        let response = self.authorize(self.http.delete(&url)).send().await?;
        ensure_success(response).await?;

        debug!(task_id = id, "Task deleted");
        Ok(())
    }
}
