//! Turning user input into task requests.

use taskdeck_client::{ClientError, CreateTaskRequest, UpdateTaskRequest};

/// Raw input for a new task, as typed.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }

    /// Trim the fields and check the title is present.
    ///
    /// An all-whitespace description is dropped.
    pub fn submit(&self) -> Result<CreateTaskRequest, ClientError> {
        let title = require_title(&self.title)?;
        Ok(CreateTaskRequest {
            title,
            description: trimmed(self.description.as_deref()),
        })
    }
}

/// Build a partial update from edit flags.
///
/// A title, when given, follows the same rule as on creation. A
/// description given as blank clears it on the server.
pub fn edit_request(
    title: Option<&str>,
    description: Option<&str>,
    completed: Option<bool>,
) -> Result<UpdateTaskRequest, ClientError> {
    let request = UpdateTaskRequest {
        title: title.map(require_title).transpose()?,
        description: description.map(|d| d.trim().to_string()),
        completed,
    };

    if request.is_empty() {
        return Err(ClientError::Validation(
            "Nothing to update: pass --title, --description or --completed".into(),
        ));
    }
    Ok(request)
}

fn require_title(raw: &str) -> Result<String, ClientError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(ClientError::Validation("Title is required".into()));
    }
    Ok(title.to_string())
}

fn trimmed(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
