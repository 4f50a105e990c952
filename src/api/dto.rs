//! DTOs returned to the webview.

use serde::Serialize;

use qp_app::flows::ComposerSnapshot;
use qp_core::blog::{display_timestamp, Post};
use qp_core::composer::{ComposerStep, PostDraft};
use qp_core::registration::{
    RegistrationForm, RegistrationStep, RegistrationWizard, SubmissionStatus,
};
use qp_core::session::Session;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub logged_in: bool,
    pub token: Option<String>,
}

impl From<Session> for SessionDto {
    fn from(session: Session) -> Self {
        Self {
            logged_in: session.logged_in,
            token: session.token,
        }
    }
}

fn status_label(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Idle => "idle",
        SubmissionStatus::Pending => "pending",
        SubmissionStatus::Success => "success",
        SubmissionStatus::Failed => "error",
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStateDto {
    pub step: u8,
    pub step_count: u8,
    pub form: RegistrationForm,
    pub status: &'static str,
    pub error: Option<String>,
}

impl From<RegistrationWizard> for RegistrationStateDto {
    fn from(wizard: RegistrationWizard) -> Self {
        Self {
            step: wizard.step.number(),
            step_count: RegistrationStep::COUNT,
            form: wizard.form,
            status: status_label(wizard.status),
            error: wizard.error.map(|e| e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerStateDto {
    pub step: u8,
    pub step_count: u8,
    pub draft: PostDraft,
    pub has_picture: bool,
    pub status: &'static str,
    pub error: Option<String>,
}

impl From<ComposerSnapshot> for ComposerStateDto {
    fn from(snapshot: ComposerSnapshot) -> Self {
        Self {
            step: snapshot.wizard.step.number(),
            step_count: ComposerStep::COUNT,
            draft: snapshot.wizard.draft,
            has_picture: snapshot.has_picture,
            status: status_label(snapshot.wizard.status),
            error: snapshot.wizard.error.map(|e| e.to_string()),
        }
    }
}

/// A feed post with its ready-to-render timestamp line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPostDto {
    #[serde(flatten)]
    pub post: Post,
    pub display_timestamp: String,
}

impl From<Post> for FeedPostDto {
    fn from(post: Post) -> Self {
        let display_timestamp =
            display_timestamp(post.created_date.as_deref(), post.created_time.as_deref());
        Self {
            post,
            display_timestamp,
        }
    }
}
