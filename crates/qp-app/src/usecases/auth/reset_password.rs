use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use qp_core::ports::BlogApiPort;

use crate::notice::{NoticeBoard, NoticeKind};
use crate::session::SessionStore;

/// Validates the OTP and sets the new password, authenticated with the
/// reset token issued by [`SendOtp`](super::SendOtp).
pub struct ResetPassword {
    api: Arc<dyn BlogApiPort>,
    session: Arc<SessionStore>,
    notices: Arc<NoticeBoard>,
}

impl ResetPassword {
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

    pub async fn execute(&self, otp: &str, new_password: &str) -> Result<String> {
        let span = info_span!("usecase.auth.reset_password");
        async {
            let token = self.session.bearer().await?;
            self.api.reset_password(&token, otp, new_password).await?;
            info!("password reset");
            let message = "Password Reset Successful".to_string();
            self.notices
                .publish(NoticeKind::Success, message.clone())
                .await;
            Ok(message)
        }
        .instrument(span)
        .await
    }
}
