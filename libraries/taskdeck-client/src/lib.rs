//! Taskdeck Client
//!
//! HTTP client library for the Taskdeck task-list API.
//!
//! # Features
//!
//! - **Authentication**: Register, login with email/password, logout
//! - **Tasks**: List, fetch, create, partially update and delete tasks
//! - **Errors**: Server messages are surfaced as-is for display
//!
//! # Example
//!
//! ```ignore
//! use taskdeck_client::{ClientConfig, TaskdeckClient, UpdateTaskRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TaskdeckClient::new(ClientConfig::new("http://localhost:8000"))?;
//!
//!     let login = client.login("me@example.com", "hunter22").await?;
//!     println!("Logged in as {}", login.user.email);
//!
//!     for task in client.list_tasks().await? {
//!         client.update_task(task.id, &UpdateTaskRequest::completed(true)).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod error;
mod response;
mod tasks;
mod types;

// Re-export main types
pub use client::TaskdeckClient;
pub use error::{ClientError, Result};
pub use types::{
    ClientConfig, CreateTaskRequest, HealthStatus, LoginResponse, Task, UpdateTaskRequest, User,
};
