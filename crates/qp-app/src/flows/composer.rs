//! Post composer flow orchestrator.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, info_span, warn, Instrument};

use qp_core::composer::{
    ComposerAction, ComposerEvent, ComposerMachine, PictureFile, PostWizard,
};
use qp_core::ports::BlogApiPort;

use crate::notice::{NoticeBoard, NoticeKind};
use crate::session::SessionStore;

/// Wizard state plus whether a picture is currently staged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerSnapshot {
    pub wizard: PostWizard,
    pub has_picture: bool,
}

/// Drives the create-post wizard.
///
/// The draft metadata lives in the wizard; the staged picture bytes are
/// held separately and only leave the process at final submit.
pub struct ComposerFlow {
    wizard: Mutex<PostWizard>,
    picture: Mutex<Option<PictureFile>>,
    api: Arc<dyn BlogApiPort>,
    session: Arc<SessionStore>,
    notices: Arc<NoticeBoard>,
}

impl ComposerFlow {
    pub fn new(
        api: Arc<dyn BlogApiPort>,
        session: Arc<SessionStore>,
        notices: Arc<NoticeBoard>,
    ) -> Self {
        Self {
            wizard: Mutex::new(PostWizard::default()),
            picture: Mutex::new(None),
            api,
            session,
            notices,
        }
    }

    pub async fn snapshot(&self) -> ComposerSnapshot {
        ComposerSnapshot {
            wizard: self.wizard.lock().await.clone(),
            has_picture: self.picture.lock().await.is_some(),
        }
    }

    pub async fn apply(&self, event: ComposerEvent) -> ComposerSnapshot {
        {
            let mut wizard = self.wizard.lock().await;
            let (next, _actions) = ComposerMachine::transition(wizard.clone(), event);
            *wizard = next;
        }
        self.snapshot().await
    }

    /// Stage a picture: bytes here, metadata into the draft.
    pub async fn attach(&self, picture: PictureFile) -> ComposerSnapshot {
        let event = ComposerEvent::PictureAttached {
            file_name: picture.file_name.clone(),
            media_type: picture.media_type.clone(),
        };
        *self.picture.lock().await = Some(picture);
        self.apply(event).await
    }

    pub async fn clear_picture(&self) -> ComposerSnapshot {
        *self.picture.lock().await = None;
        self.apply(ComposerEvent::PictureCleared).await
    }

    /// Submit the draft, with the staged picture when one exists.
    ///
    /// Requires a live session; the create-post endpoint rejects
    /// anonymous calls anyway.
    pub async fn submit(&self) -> anyhow::Result<ComposerSnapshot> {
        let span = info_span!("flow.composer.submit");
        async {
            let token = self.session.bearer().await?;

            let actions = {
                let mut wizard = self.wizard.lock().await;
                let (next, actions) =
                    ComposerMachine::transition(wizard.clone(), ComposerEvent::SubmitRequested);
                *wizard = next;
                actions
            };
            let Some(ComposerAction::SubmitPost(draft)) = actions.into_iter().next() else {
                return Ok(self.snapshot().await);
            };

            let picture = self.picture.lock().await.clone();
            match self
                .api
                .create_post(&token, &draft, picture.as_ref())
                .await
            {
                Ok(message) => {
                    info!("post created");
                    let message = if message.is_empty() {
                        "Post created!".to_string()
                    } else {
                        message
                    };
                    self.apply(ComposerEvent::SubmitSucceeded).await;
                    *self.picture.lock().await = None;
                    self.notices.publish(NoticeKind::Success, message).await;
                }
                Err(e) => {
                    let message = e.to_string();
                    warn!(error = %message, "post creation failed");
                    self.apply(ComposerEvent::SubmitFailed {
                        message: message.clone(),
                    })
                    .await;
                    self.notices.publish(NoticeKind::Error, message).await;
                }
            }

            Ok(self.snapshot().await)
        }
        .instrument(span)
        .await
    }
}
