//! Types for Taskdeck API requests and responses.

use serde::{Deserialize, Serialize};

/// Configuration for connecting to a Taskdeck server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "http://localhost:8000")
    pub url: String,
    /// Bearer token to attach from the start (e.g., restored from disk)
    pub access_token: Option<String>,
}

impl ClientConfig {
    /// Create a new client config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: None,
        }
    }

    /// Create a config with an existing token.
    pub fn with_token(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: Some(access_token.into()),
        }
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for the register and login endpoints.
#[derive(Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// An account on the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Response from successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

// =============================================================================
// Task Types
// =============================================================================

/// A task as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Task {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating a task.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateTaskRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update for a task. Fields left as `None` are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTaskRequest {
    /// Update that only flips the completion flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

// =============================================================================
// Server Info Types
// =============================================================================

/// Body of the `/healthz` endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthStatus {
    pub status: String,
}
