//! Session store.
//!
//! Single source of truth for `{logged_in, token}`, readable by every
//! command. 会话的唯一可信来源。

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use qp_core::ports::{ApiError, TokenStorePort};
use qp_core::session::Session;

pub struct SessionStore {
    session: RwLock<Session>,
    tokens: Arc<dyn TokenStorePort>,
}

impl SessionStore {
    pub fn new(tokens: Arc<dyn TokenStorePort>) -> Self {
        Self {
            session: RwLock::new(Session::anonymous()),
            tokens,
        }
    }

    /// Load the persisted token at boot; absence means logged out.
    pub async fn restore(&self) -> anyhow::Result<Session> {
        let restored = match self.tokens.load().await? {
            Some(token) => Session::authenticated(token),
            None => Session::anonymous(),
        };
        debug!(logged_in = restored.logged_in, "session restored");
        *self.session.write().await = restored.clone();
        Ok(restored)
    }

    /// Mark the session authenticated and persist the token.
    ///
    /// The token is opaque; no format validation happens here.
    pub async fn login(&self, token: String) -> anyhow::Result<()> {
        *self.session.write().await = Session::authenticated(token.clone());
        self.tokens.store(&token).await?;
        info!("session established");
        Ok(())
    }

    /// Drop the credential, in memory and on disk. Navigating back to a
    /// public route is the caller's job.
    pub async fn logout(&self) -> anyhow::Result<()> {
        *self.session.write().await = Session::anonymous();
        self.tokens.clear().await?;
        info!("session cleared");
        Ok(())
    }

    pub async fn snapshot(&self) -> Session {
        self.session.read().await.clone()
    }

    /// The bearer token for an authenticated call.
    pub async fn bearer(&self) -> Result<String, ApiError> {
        self.session
            .read()
            .await
            .token
            .clone()
            .ok_or(ApiError::Unauthorized)
    }
}
