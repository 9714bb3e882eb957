//! Taskdeck Session
//!
//! Client-side state on top of [`taskdeck_client`]:
//!
//! - **Session**: who is logged in, with the token persisted through an
//!   injected [`TokenStore`]
//! - **TaskCollection**: the user's tasks, changed only after the server
//!   confirms each operation
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use taskdeck_client::{ClientConfig, CreateTaskRequest, TaskdeckClient};
//! use taskdeck_session::{FileTokenStore, Session, TaskCollection};
//!
//! let client = TaskdeckClient::new(ClientConfig::new("http://localhost:8000"))?;
//! let store = Arc::new(FileTokenStore::new("/home/me/.taskdeck/session.json"));
//! let session = Arc::new(Session::restore(client, store).await?);
//!
//! let mut tasks = TaskCollection::new(session.clone());
//! tasks.sync_with_session().await;
//! tasks.create(CreateTaskRequest::new("Water plants")).await?;
//! ```

mod collection;
mod error;
mod session;
mod store;

pub use collection::{LoadState, TaskCollection};
pub use error::{Result, SessionError, StoreError};
pub use session::Session;
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY, USER_KEY};
