//! Authenticated session state.

use crate::error::{Result, StoreError};
use crate::store::{TokenStore, TOKEN_KEY, USER_KEY};
use std::sync::Arc;
use taskdeck_client::{TaskdeckClient, User};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Who is logged in, and the client their token is attached to.
///
/// The session is the only writer of the persisted token. It is passed
/// explicitly (usually as `Arc<Session>`) to whatever needs auth state.
pub struct Session {
    client: TaskdeckClient,
    store: Arc<dyn TokenStore>,
    user: watch::Sender<Option<User>>,
}

impl Session {
    /// Build a session, re-attaching any persisted token.
    ///
    /// The token is not checked against the server here. An expired token
    /// shows up as a rejected request the first time it is used.
    pub async fn restore(client: TaskdeckClient, store: Arc<dyn TokenStore>) -> Result<Self> {
        let user = match store.get(TOKEN_KEY).await? {
            Some(token) => {
                let user = Self::load_user(store.as_ref()).await?;
                // A token nobody can be shown as owning stays detached
                if user.is_some() {
                    client.set_token(token).await;
                }
                user
            }
            None => {
                // A user record without a token cannot authenticate anything
                store.remove(USER_KEY).await?;
                None
            }
        };

        if let Some(user) = &user {
            debug!(user_id = user.id, email = %user.email, "Restored session");
        }

        let (tx, _rx) = watch::channel(user);
        Ok(Self {
            client,
            store,
            user: tx,
        })
    }

    async fn load_user(store: &dyn TokenStore) -> Result<Option<User>> {
        let Some(raw) = store.get(USER_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!(error = %e, "Discarding unreadable stored user");
                store.remove(USER_KEY).await?;
                Ok(None)
            }
        }
    }

    pub fn client(&self) -> &TaskdeckClient {
        &self.client
    }

    /// The logged-in user, if any.
    pub fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.borrow().is_some()
    }

    /// Watch for login/logout. The receiver starts with the current value
    /// marked as seen.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.user.subscribe()
    }

    /// Log in and persist the token.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let response = self.client.login(email, password).await?;

        // The client already holds the token; it must not outlive a failed save
        if let Err(e) = self.persist(&response.access_token, &response.user).await {
            warn!(error = %e, "Could not persist session, dropping token");
            self.client.logout().await;
            self.store.remove(TOKEN_KEY).await.ok();
            return Err(e);
        }

        info!(user_id = response.user.id, "Session started");
        self.user.send_replace(Some(response.user.clone()));
        Ok(response.user)
    }

    async fn persist(&self, token: &str, user: &User) -> Result<()> {
        let user_json = serde_json::to_string(user).map_err(StoreError::from)?;
        self.store.set(TOKEN_KEY, token).await?;
        self.store.set(USER_KEY, &user_json).await?;
        Ok(())
    }

    /// Create an account, then log in with the same credentials.
    pub async fn register(&self, email: &str, password: &str) -> Result<User> {
        self.client.register(email, password).await?;
        self.login(email, password).await
    }

    /// Drop the token everywhere and forget the user.
    pub async fn logout(&self) -> Result<()> {
        self.client.logout().await;
        self.user.send_replace(None);

        self.store.remove(TOKEN_KEY).await?;
        self.store.remove(USER_KEY).await?;

        info!("Session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryTokenStore, MockTokenStore};
    use mockall::predicate::eq;
    use taskdeck_client::ClientConfig;

    fn offline_client() -> TaskdeckClient {
        TaskdeckClient::new(ClientConfig::new("http://127.0.0.1:1")).unwrap()
    }

    fn stored_user() -> String {
        serde_json::json!({
            "id": 7,
            "email": "ada@example.com",
            "created_at": "2024-01-01T00:00:00",
            "updated_at": "2024-01-01T00:00:00"
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_restore_without_token() {
        let session = Session::restore(offline_client(), Arc::new(MemoryTokenStore::new()))
            .await
            .unwrap();

        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(!session.client().is_authenticated().await);
    }

    #[tokio::test]
    async fn test_restore_attaches_token_without_validation() {
        let store = Arc::new(MemoryTokenStore::new());
        store.set(TOKEN_KEY, "maybe_expired").await.unwrap();
        store.set(USER_KEY, &stored_user()).await.unwrap();

        // The client points at a closed port; restoring must not touch it
        let session = Session::restore(offline_client(), store).await.unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().email, "ada@example.com");
        assert_eq!(
            session.client().token().await.as_deref(),
            Some("maybe_expired")
        );
    }

    #[tokio::test]
    async fn test_restore_drops_orphan_user() {
        let mut store = MockTokenStore::new();
        store
            .expect_get()
            .with(eq(TOKEN_KEY))
            .times(1)
            .returning(|_| Ok(None));
        store
            .expect_remove()
            .with(eq(USER_KEY))
            .times(1)
            .returning(|_| Ok(()));

        let session = Session::restore(offline_client(), Arc::new(store))
            .await
            .unwrap();
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_restore_discards_unreadable_user() {
        let store = Arc::new(MemoryTokenStore::new());
        store.set(TOKEN_KEY, "token").await.unwrap();
        store.set(USER_KEY, "{broken").await.unwrap();

        let session = Session::restore(offline_client(), store.clone())
            .await
            .unwrap();

        assert!(!session.is_authenticated());
        assert!(session.client().token().await.is_none());
        assert_eq!(store.get(USER_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_logout_clears_store_and_client() {
        let mut store = MockTokenStore::new();
        store
            .expect_get()
            .with(eq(TOKEN_KEY))
            .returning(|_| Ok(Some("abc".to_string())));
        store
            .expect_get()
            .with(eq(USER_KEY))
            .returning(|_| Ok(Some(stored_user())));
        store
            .expect_remove()
            .with(eq(TOKEN_KEY))
            .times(1)
            .returning(|_| Ok(()));
        store
            .expect_remove()
            .with(eq(USER_KEY))
            .times(1)
            .returning(|_| Ok(()));

        let session = Session::restore(offline_client(), Arc::new(store))
            .await
            .unwrap();
        let mut auth = session.subscribe();
        assert!(session.is_authenticated());

        session.logout().await.unwrap();

        assert!(!session.is_authenticated());
        assert!(session.client().token().await.is_none());
        assert!(auth.has_changed().unwrap());
        assert!(auth.borrow_and_update().is_none());
    }
}
