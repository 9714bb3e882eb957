//! Authentication endpoints.

use crate::error::{ClientError, Result};
use crate::response::read_json;
use crate::types::{Credentials, LoginResponse, User};
use reqwest::Client;
use tracing::{debug, info, warn};

/// Authentication client for a Taskdeck server.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Create a new account. Does not log in.
    pub async fn register(&self, email: &str, password: &str) -> Result<User> {
        let url = format!("{}/api/v1/auth/register", self.base_url);
        debug!(url = %url, email = %email, "Registering account");

        let response = self
            .http
            .post(&url)
            .json(&Credentials {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        let user: User = read_json(response, "register response").await?;
        info!(user_id = user.id, email = %user.email, "Account registered");
        Ok(user)
    }

    /// Exchange credentials for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/api/v1/auth/login", self.base_url);
        debug!(url = %url, email = %email, "Attempting login");

        let response = self
            .http
            .post(&url)
            .json(&Credentials {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        match read_json::<LoginResponse>(response, "login response").await {
            Ok(login) => {
                info!(user_id = login.user.id, email = %login.user.email, "Login successful");
                Ok(login)
            }
            Err(e @ ClientError::ServerRejected { status: 401, .. }) => {
                warn!(email = %email, "Login failed: invalid credentials");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}
