use std::sync::Arc;

use anyhow::Result;

use qp_core::blog::UserProfileView;
use qp_core::ports::BlogApiPort;

use crate::session::SessionStore;

/// Loads another user's profile page: profile plus their posts.
pub struct ViewUserProfile {
    api: Arc<dyn BlogApiPort>,
    session: Arc<SessionStore>,
}

impl ViewUserProfile {
    pub fn new(api: Arc<dyn BlogApiPort>, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }

    pub async fn execute(&self, user_id: u64) -> Result<UserProfileView> {
        let token = self.session.bearer().await?;
        Ok(self.api.view_user(&token, user_id).await?)
    }
}
