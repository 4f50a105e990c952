use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info_span, Instrument};

use qp_core::ports::BlogApiPort;

use crate::notice::{NoticeBoard, NoticeKind};
use crate::session::SessionStore;

/// Posts a comment under a post.
///
/// Whitespace-only input is a no-op: no request is sent and the caller
/// gets `false` back.
pub struct CreateComment {
    api: Arc<dyn BlogApiPort>,
    session: Arc<SessionStore>,
    notices: Arc<NoticeBoard>,
}

impl CreateComment {
    pub fn new(
        api: Arc<dyn BlogApiPort>,
        session: Arc<SessionStore>,
        notices: Arc<NoticeBoard>,
    ) -> Self {
        Self {
            api,
            session,
            notices,
        }
    }

    pub async fn execute(&self, post_id: u64, content: &str) -> Result<bool> {
        let span = info_span!("usecase.comments.create", post_id);
        async {
            let content = content.trim();
            if content.is_empty() {
                debug!("empty comment ignored");
                return Ok(false);
            }

            let token = self.session.bearer().await?;
            self.api.create_comment(&token, post_id, content).await?;
            self.notices
                .publish(NoticeKind::Success, "Comment posted successfully!")
                .await;
            Ok(true)
        }
        .instrument(span)
        .await
    }
}
