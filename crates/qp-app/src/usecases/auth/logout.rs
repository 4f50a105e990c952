use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use qp_core::session::Session;

use crate::session::SessionStore;

/// Clears the session; the webview then navigates to a public route.
pub struct Logout {
    session: Arc<SessionStore>,
}

impl Logout {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    pub async fn execute(&self) -> Result<Session> {
        self.session.logout().await?;
        info!("logged out");
        Ok(self.session.snapshot().await)
    }
}
