use std::sync::Arc;

use anyhow::Result;

use qp_core::blog::Comment;
use qp_core::ports::BlogApiPort;

use crate::session::SessionStore;

/// Loads the comments under one post.
pub struct ListComments {
    api: Arc<dyn BlogApiPort>,
    session: Arc<SessionStore>,
}

impl ListComments {
    pub fn new(api: Arc<dyn BlogApiPort>, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }

    pub async fn execute(&self, post_id: u64) -> Result<Vec<Comment>> {
        let token = self.session.bearer().await?;
        Ok(self.api.list_comments(&token, post_id).await?)
    }
}
