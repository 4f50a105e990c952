//! Post composer state machine.
//!
//! Same shape as the registration machine: a pure transition function,
//! side effects expressed as actions for the flow to execute.

use serde::{Deserialize, Serialize};

use super::draft::{DraftUpdate, PostDraft};
use crate::registration::machine::{SubmissionStatus, WizardError};

/// Composer steps: write first, attach second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComposerStep {
    Draft,
    Attachment,
}

impl ComposerStep {
    pub const COUNT: u8 = 2;

    pub fn number(self) -> u8 {
        match self {
            ComposerStep::Draft => 1,
            ComposerStep::Attachment => 2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            ComposerStep::Draft => ComposerStep::Attachment,
            ComposerStep::Attachment => ComposerStep::Attachment,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ComposerStep::Draft => ComposerStep::Draft,
            ComposerStep::Attachment => ComposerStep::Draft,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostWizard {
    pub step: ComposerStep,
    pub draft: PostDraft,
    pub status: SubmissionStatus,
    pub error: Option<WizardError>,
}

impl Default for PostWizard {
    fn default() -> Self {
        Self {
            step: ComposerStep::Draft,
            draft: PostDraft::default(),
            status: SubmissionStatus::Idle,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerEvent {
    Update(DraftUpdate),
    Next,
    Prev,
    /// A picture was staged; only the metadata enters the draft.
    PictureAttached {
        file_name: String,
        media_type: String,
    },
    PictureCleared,
    SubmitRequested,
    SubmitSucceeded,
    SubmitFailed { message: String },
    DismissError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerAction {
    /// Send the draft (and any staged picture) to the create-post endpoint.
    SubmitPost(Box<PostDraft>),
}

pub struct ComposerMachine;

impl ComposerMachine {
    pub fn transition(
        wizard: PostWizard,
        event: ComposerEvent,
    ) -> (PostWizard, Vec<ComposerAction>) {
        let mut wizard = wizard;
        match event {
            ComposerEvent::Update(update) => {
                update.apply(&mut wizard.draft);
                (wizard, Vec::new())
            }
            ComposerEvent::Next => {
                wizard.step = wizard.step.next();
                (wizard, Vec::new())
            }
            ComposerEvent::Prev => {
                wizard.step = wizard.step.prev();
                (wizard, Vec::new())
            }
            ComposerEvent::PictureAttached {
                file_name,
                media_type,
            } => {
                wizard.draft.picture_name = Some(file_name);
                wizard.draft.image_type = Some(media_type);
                (wizard, Vec::new())
            }
            ComposerEvent::PictureCleared => {
                wizard.draft.picture_name = None;
                wizard.draft.image_type = None;
                (wizard, Vec::new())
            }
            ComposerEvent::SubmitRequested => {
                if wizard.status == SubmissionStatus::Pending {
                    return (wizard, Vec::new());
                }
                wizard.status = SubmissionStatus::Pending;
                wizard.error = None;
                let draft = Box::new(wizard.draft.clone());
                (wizard, vec![ComposerAction::SubmitPost(draft)])
            }
            ComposerEvent::SubmitSucceeded => (
                PostWizard {
                    status: SubmissionStatus::Success,
                    ..PostWizard::default()
                },
                Vec::new(),
            ),
            ComposerEvent::SubmitFailed { message } => {
                wizard.status = SubmissionStatus::Failed;
                wizard.error = Some(WizardError::Rejected(message));
                (wizard, Vec::new())
            }
            ComposerEvent::DismissError => {
                wizard.error = None;
                (wizard, Vec::new())
            }
        }
    }
}
