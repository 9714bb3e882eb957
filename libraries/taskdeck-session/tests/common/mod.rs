//! Shared fixtures for session integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use taskdeck_client::{ClientConfig, TaskdeckClient};
use taskdeck_session::{MemoryTokenStore, Session};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const EMAIL: &str = "ada@example.com";
pub const PASSWORD: &str = "Secret123!";
pub const TOKEN: &str = "issued_token";

pub fn user_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "email": EMAIL,
        "created_at": "2024-01-01T00:00:00",
        "updated_at": "2024-01-01T00:00:00"
    })
}

pub fn task_json(id: i64, title: &str, completed: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "user_id": 7,
        "title": title,
        "description": null,
        "completed": completed,
        "created_at": "2024-01-02T10:30:00",
        "updated_at": "2024-01-02T10:30:00"
    })
}

pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": TOKEN,
            "token_type": "bearer",
            "user": user_json()
        })))
        .mount(server)
        .await;
}

pub async fn session_for(server: &MockServer, store: Arc<MemoryTokenStore>) -> Arc<Session> {
    let client = TaskdeckClient::new(ClientConfig::new(server.uri())).unwrap();
    Arc::new(Session::restore(client, store).await.unwrap())
}

/// A session already logged in against `server`.
pub async fn logged_in(server: &MockServer) -> Arc<Session> {
    mount_login(server).await;
    let session = session_for(server, Arc::new(MemoryTokenStore::new())).await;
    session.login(EMAIL, PASSWORD).await.unwrap();
    session
}
