//! Use case for logging in.
//! 登录用例。

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use qp_core::ports::BlogApiPort;
use qp_core::session::Session;

use crate::session::SessionStore;

/// Exchanges credentials for a bearer token and establishes the session.
pub struct LoginUser {
    api: Arc<dyn BlogApiPort>,
    session: Arc<SessionStore>,
}

impl LoginUser {
    pub fn new(api: Arc<dyn BlogApiPort>, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }

    pub async fn execute(&self, username: &str, password: &str) -> Result<Session> {
        let span = info_span!("usecase.auth.login");
        async {
            let token = self.api.login(username, password).await?;
            self.session.login(token).await?;
            info!("login succeeded");
            Ok(self.session.snapshot().await)
        }
        .instrument(span)
        .await
    }
}
