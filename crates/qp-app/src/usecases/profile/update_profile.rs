use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use qp_core::blog::ProfileUpdate;
use qp_core::ports::BlogApiPort;

use crate::notice::{NoticeBoard, NoticeKind};
use crate::session::SessionStore;

/// Saves the edited profile.
pub struct UpdateProfile {
    api: Arc<dyn BlogApiPort>,
    session: Arc<SessionStore>,
    notices: Arc<NoticeBoard>,
}

impl UpdateProfile {
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

    pub async fn execute(&self, update: &ProfileUpdate) -> Result<String> {
        let span = info_span!("usecase.profile.update");
        async {
            let token = self.session.bearer().await?;
            let message = self.api.update_profile(&token, update).await?;
            info!("profile updated");
            let message = if message.is_empty() {
                "Profile updated successfully!".to_string()
            } else {
                message
            };
            self.notices
                .publish(NoticeKind::Success, message.clone())
                .await;
            Ok(message)
        }
        .instrument(span)
        .await
    }
}
