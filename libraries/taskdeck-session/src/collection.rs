//! In-memory task list kept in step with the server.

use crate::session::Session;
use std::sync::Arc;
use taskdeck_client::{ClientError, CreateTaskRequest, Task, UpdateTaskRequest, User};
use tokio::sync::watch;
use tracing::{debug, warn};

/// Where the collection is in its fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// The current user's tasks, newest first.
///
/// Entries only change after the server confirms the operation, so the
/// list always matches the last successful response. Failed operations
/// record a display message in [`TaskCollection::error`] and hand the
/// error back to the caller.
pub struct TaskCollection {
    session: Arc<Session>,
    auth: watch::Receiver<Option<User>>,
    synced: bool,
    tasks: Vec<Task>,
    state: LoadState,
    error: Option<String>,
}

impl TaskCollection {
    pub fn new(session: Arc<Session>) -> Self {
        let auth = session.subscribe();
        Self {
            session,
            auth,
            synced: false,
            tasks: Vec::new(),
            state: LoadState::Idle,
            error: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Last recorded error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// React to login/logout since the last call.
    ///
    /// The first call always runs. Logging out empties the list and
    /// returns it to `Idle`; logging in fetches.
    pub async fn sync_with_session(&mut self) {
        let changed = self.auth.has_changed().unwrap_or(false);
        if self.synced && !changed {
            return;
        }
        self.synced = true;

        let authenticated = self.auth.borrow_and_update().is_some();
        if authenticated {
            self.fetch().await;
        } else {
            self.tasks.clear();
            self.error = None;
            self.state = LoadState::Idle;
        }
    }

    /// Replace the list with the server's. No-op when logged out.
    pub async fn fetch(&mut self) {
        if !self.session.is_authenticated() {
            return;
        }

        self.state = LoadState::Loading;
        self.error = None;

        match self.session.client().list_tasks().await {
            Ok(tasks) => {
                debug!(count = tasks.len(), "Task list loaded");
                self.tasks = tasks;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                self.record(&e);
                self.state = LoadState::Errored;
            }
        }
    }

    /// Create a task and put it at the front of the list.
    pub async fn create(&mut self, request: CreateTaskRequest) -> Result<Task, ClientError> {
        match self.session.client().create_task(&request).await {
            Ok(task) => {
                self.tasks.insert(0, task.clone());
                Ok(task)
            }
            Err(e) => {
                self.record(&e);
                Err(e)
            }
        }
    }

    /// Update a task and replace it where it stands.
    pub async fn update(
        &mut self,
        id: i64,
        request: UpdateTaskRequest,
    ) -> Result<Task, ClientError> {
        match self.session.client().update_task(id, &request).await {
            Ok(task) => {
                if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == id) {
                    *slot = task.clone();
                }
                Ok(task)
            }
            Err(e) => {
                self.record(&e);
                Err(e)
            }
        }
    }

    /// Flip the completion flag of a loaded task.
    pub async fn toggle(&mut self, id: i64) -> Result<Task, ClientError> {
        let Some(completed) = self.get(id).map(|t| t.completed) else {
            let e = ClientError::Validation(format!("Task {} is not in the list", id));
            self.record(&e);
            return Err(e);
        };

        self.update(id, UpdateTaskRequest::completed(!completed))
            .await
    }

    /// Delete a task, dropping it from the list once the server agrees.
    pub async fn delete(&mut self, id: i64) -> Result<(), ClientError> {
        match self.session.client().delete_task(id).await {
            Ok(()) => {
                self.tasks.retain(|t| t.id != id);
                Ok(())
            }
            Err(e) => {
                self.record(&e);
                Err(e)
            }
        }
    }

    fn record(&mut self, error: &ClientError) {
        let message = error.display_message();
        warn!(error = %message, "Task operation failed");
        self.error = Some(message);
    }
}
