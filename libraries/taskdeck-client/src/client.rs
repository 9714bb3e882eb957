//! Main Taskdeck client.

use crate::auth::AuthClient;
use crate::error::{ClientError, Result};
use crate::response::read_json;
use crate::tasks::TaskClient;
use crate::types::{
    ClientConfig, CreateTaskRequest, HealthStatus, LoginResponse, Task, UpdateTaskRequest, User,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Client for a Taskdeck server.
///
/// Cloning is cheap and clones share the bearer token, so a login made
/// through one clone is visible to all of them.
///
/// # Example
///
/// ```ignore
/// use taskdeck_client::{ClientConfig, CreateTaskRequest, TaskdeckClient};
///
/// let client = TaskdeckClient::new(ClientConfig::new("http://localhost:8000"))?;
/// client.login("me@example.com", "hunter22").await?;
///
/// let task = client.create_task(&CreateTaskRequest::new("Water plants")).await?;
/// let tasks = client.list_tasks().await?;
/// ```
#[derive(Clone)]
pub struct TaskdeckClient {
    http: Client,
    base_url: Arc<str>,
    access_token: Arc<RwLock<Option<String>>>,
}

impl TaskdeckClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Taskdeck/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: url.into(),
            access_token: Arc::new(RwLock::new(config.access_token)),
        })
    }

    /// Get the server URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the client has a bearer token.
    pub async fn is_authenticated(&self) -> bool {
        self.access_token.read().await.is_some()
    }

    /// Get the current bearer token.
    pub async fn token(&self) -> Option<String> {
        self.access_token.read().await.clone()
    }

    /// Set the token directly (e.g., from stored credentials).
    pub async fn set_token(&self, access_token: impl Into<String>) {
        *self.access_token.write().await = Some(access_token.into());
    }

    /// Check that the server is up. Does not require authentication.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}/healthz", self.base_url);
        debug!(url = %url, "Checking server health");

        let response = self.http.get(&url).send().await?;
        read_json(response, "health status").await
    }

    /// Create an account. The client stays logged out.
    pub async fn register(&self, email: &str, password: &str) -> Result<User> {
        AuthClient::new(&self.http, &self.base_url)
            .register(email, password)
            .await
    }

    /// Login with email and password.
    ///
    /// On success, the token is stored for subsequent requests.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let response = AuthClient::new(&self.http, &self.base_url)
            .login(email, password)
            .await?;

        *self.access_token.write().await = Some(response.access_token.clone());

        Ok(response)
    }

    /// Clear the stored token. No request is made.
    pub async fn logout(&self) {
        *self.access_token.write().await = None;
        info!("Logged out");
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let token = self.token().await;
        self.tasks(token.as_deref()).list_tasks().await
    }

    pub async fn get_task(&self, id: i64) -> Result<Task> {
        let token = self.token().await;
        self.tasks(token.as_deref()).get_task(id).await
    }

    pub async fn create_task(&self, request: &CreateTaskRequest) -> Result<Task> {
        let token = self.token().await;
        self.tasks(token.as_deref()).create_task(request).await
    }

    pub async fn update_task(&self, id: i64, request: &UpdateTaskRequest) -> Result<Task> {
        let token = self.token().await;
        self.tasks(token.as_deref()).update_task(id, request).await
    }

    pub async fn delete_task(&self, id: i64) -> Result<()> {
        let token = self.token().await;
        self.tasks(token.as_deref()).delete_task(id).await
    }

    fn tasks<'a>(&'a self, access_token: Option<&'a str>) -> TaskClient<'a> {
        TaskClient::new(&self.http, &self.base_url, access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(TaskdeckClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(TaskdeckClient::new(ClientConfig::new("http://localhost:8000")).is_ok());

        // Invalid URLs
        assert!(TaskdeckClient::new(ClientConfig::new("")).is_err());
        assert!(TaskdeckClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(TaskdeckClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client =
            TaskdeckClient::new(ClientConfig::new("https://example.com//")).expect("valid url");

        assert_eq!(client.base_url(), "https://example.com");
    }

    #[tokio::test]
    async fn test_clones_share_token() {
        let client = TaskdeckClient::new(ClientConfig::new("http://localhost:8000")).unwrap();
        let other = client.clone();

        client.set_token("shared").await;
        assert_eq!(other.token().await.as_deref(), Some("shared"));

        other.logout().await;
        assert!(!client.is_authenticated().await);
    }
}
