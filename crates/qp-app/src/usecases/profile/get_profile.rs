use std::sync::Arc;

use anyhow::Result;

use qp_core::blog::UserProfile;
use qp_core::ports::BlogApiPort;

use crate::session::SessionStore;

/// Loads the authenticated user's own profile.
pub struct GetProfile {
    api: Arc<dyn BlogApiPort>,
    session: Arc<SessionStore>,
}

impl GetProfile {
    pub fn new(api: Arc<dyn BlogApiPort>, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }

    pub async fn execute(&self) -> Result<UserProfile> {
        let token = self.session.bearer().await?;
        Ok(self.api.get_profile(&token).await?)
    }
}
