use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use qp_core::ports::BlogApiPort;

use crate::session::SessionStore;

/// Requests a password-reset OTP for an email address.
///
/// The service answers with a short-lived reset token; it is stored as
/// the session token so the follow-up reset call can authenticate.
pub struct SendOtp {
    api: Arc<dyn BlogApiPort>,
    session: Arc<SessionStore>,
}

impl SendOtp {
    pub fn new(api: Arc<dyn BlogApiPort>, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }

    pub async fn execute(&self, email: &str) -> Result<String> {
        let span = info_span!("usecase.auth.send_otp");
        async {
            let issued = self.api.send_otp(email).await?;
            self.session.login(issued.token).await?;
            info!("otp issued");
            Ok(issued
                .message
                .unwrap_or_else(|| "OTP sent to your email".to_string()))
        }
        .instrument(span)
        .await
    }
}
