//! Registration flow orchestrator.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, info_span, warn, Instrument};

use qp_core::ports::BlogApiPort;
use qp_core::registration::{
    RegistrationAction, RegistrationEvent, RegistrationMachine, RegistrationWizard,
};

use crate::notice::{NoticeBoard, NoticeKind};

/// Drives the sign-up wizard.
///
/// Wizard state lives only here, in memory; it is lost on restart, which
/// matches how the flow is meant to behave.
pub struct RegistrationFlow {
    wizard: Mutex<RegistrationWizard>,
    api: Arc<dyn BlogApiPort>,
    notices: Arc<NoticeBoard>,
}

impl RegistrationFlow {
    pub fn new(api: Arc<dyn BlogApiPort>, notices: Arc<NoticeBoard>) -> Self {
        Self {
            wizard: Mutex::new(RegistrationWizard::default()),
            api,
            notices,
        }
    }

    pub async fn snapshot(&self) -> RegistrationWizard {
        self.wizard.lock().await.clone()
    }

    /// Apply a navigation or edit event. Submission actions are ignored
    /// here; use [`submit`](Self::submit) for those.
    pub async fn apply(&self, event: RegistrationEvent) -> RegistrationWizard {
        let mut wizard = self.wizard.lock().await;
        let (next, _actions) = RegistrationMachine::transition(wizard.clone(), event);
        *wizard = next;
        wizard.clone()
    }

    /// Submit the completed form to the registration endpoint.
    ///
    /// The outcome lands in the wizard state (reset on success, error
    /// retained on failure) and in a transient notice.
    pub async fn submit(&self) -> RegistrationWizard {
        let span = info_span!("flow.registration.submit");
        async {
            let actions = {
                let mut wizard = self.wizard.lock().await;
                let (next, actions) = RegistrationMachine::transition(
                    wizard.clone(),
                    RegistrationEvent::SubmitRequested,
                );
                *wizard = next;
                actions
            };

            // A submit that is already pending emits no action.
            let Some(RegistrationAction::SubmitForm(form)) = actions.into_iter().next() else {
                return self.snapshot().await;
            };

            match self.api.register(&form).await {
                Ok(message) => {
                    info!("registration accepted");
                    let message = if message.is_empty() {
                        "Registration successful!".to_string()
                    } else {
                        message
                    };
                    self.apply(RegistrationEvent::SubmitSucceeded).await;
                    self.notices.publish(NoticeKind::Success, message).await;
                }
                Err(e) => {
                    let message = e.to_string();
                    warn!(error = %message, "registration rejected");
                    self.apply(RegistrationEvent::SubmitFailed {
                        message: message.clone(),
                    })
                    .await;
                    self.notices.publish(NoticeKind::Error, message).await;
                }
            }

            self.snapshot().await
        }
        .instrument(span)
        .await
    }
}
