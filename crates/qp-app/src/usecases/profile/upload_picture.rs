use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use qp_core::composer::PictureFile;
use qp_core::ports::BlogApiPort;

use crate::notice::{NoticeBoard, NoticeKind};
use crate::session::SessionStore;

/// Uploads a new profile picture as a single-part multipart request.
pub struct UploadProfilePicture {
    api: Arc<dyn BlogApiPort>,
    session: Arc<SessionStore>,
    notices: Arc<NoticeBoard>,
}

impl UploadProfilePicture {
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

    pub async fn execute(&self, picture: &PictureFile) -> Result<String> {
        let span = info_span!("usecase.profile.upload_picture");
        async {
            let token = self.session.bearer().await?;
            self.api.upload_profile_picture(&token, picture).await?;
            info!(file = %picture.file_name, "profile picture uploaded");
            let message = "Profile picture uploaded successfully!".to_string();
            self.notices
                .publish(NoticeKind::Success, message.clone())
                .await;
            Ok(message)
        }
        .instrument(span)
        .await
    }
}
