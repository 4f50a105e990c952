//! Registration wizard state machine.
//!
//! Defines a pure state transition function for the sign-up flow.

use serde::{Deserialize, Serialize};

use super::form::{RegistrationForm, RegistrationUpdate};

/// Ordered wizard steps.
///
/// 注册向导步骤。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStep {
    /// Name, username and password pair.
    Credentials,
    /// Email, role and bio.
    Identity,
    /// Social links.
    Social,
}

impl RegistrationStep {
    pub const COUNT: u8 = 3;

    pub fn number(self) -> u8 {
        match self {
            RegistrationStep::Credentials => 1,
            RegistrationStep::Identity => 2,
            RegistrationStep::Social => 3,
        }
    }

    /// The following step; saturates at the last one.
    pub fn next(self) -> Self {
        match self {
            RegistrationStep::Credentials => RegistrationStep::Identity,
            RegistrationStep::Identity => RegistrationStep::Social,
            RegistrationStep::Social => RegistrationStep::Social,
        }
    }

    /// The preceding step; floors at the first one.
    pub fn prev(self) -> Self {
        match self {
            RegistrationStep::Credentials => RegistrationStep::Credentials,
            RegistrationStep::Identity => RegistrationStep::Credentials,
            RegistrationStep::Social => RegistrationStep::Identity,
        }
    }
}

/// Submission lifecycle of a wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Idle,
    Pending,
    Success,
    Failed,
}

/// Wizard error types.
///
/// 向导错误类型。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum WizardError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("{0}")]
    Rejected(String),
}

/// Full wizard state held in memory by the flow; intentionally not
/// persisted across restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationWizard {
    pub step: RegistrationStep,
    pub form: RegistrationForm,
    pub status: SubmissionStatus,
    pub error: Option<WizardError>,
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self {
            step: RegistrationStep::Credentials,
            form: RegistrationForm::default(),
            status: SubmissionStatus::Idle,
            error: None,
        }
    }
}

/// Events that drive the registration flow.
///
/// 驱动注册流程的事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationEvent {
    /// User edited one or more form fields.
    Update(RegistrationUpdate),
    /// Advance to the next step.
    Next,
    /// Go back one step.
    Prev,
    /// User asked to submit the completed form.
    SubmitRequested,
    /// The remote registration call succeeded.
    SubmitSucceeded,
    /// The remote registration call failed.
    SubmitFailed { message: String },
    /// The transient error banner expired.
    DismissError,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationAction {
    /// Send the form to the registration endpoint.
    SubmitForm(Box<RegistrationForm>),
}

/// Pure registration state machine.
///
/// 纯状态机：不包含副作用。
pub struct RegistrationMachine;

impl RegistrationMachine {
    pub fn transition(
        wizard: RegistrationWizard,
        event: RegistrationEvent,
    ) -> (RegistrationWizard, Vec<RegistrationAction>) {
        let mut wizard = wizard;
        match event {
            RegistrationEvent::Update(update) => {
                update.apply(&mut wizard.form);
                (wizard, Vec::new())
            }
            RegistrationEvent::Next => {
                // Leaving the credentials step requires a confirmed password.
                if wizard.step == RegistrationStep::Credentials
                    && wizard.form.password != wizard.form.re_password
                {
                    wizard.error = Some(WizardError::PasswordMismatch);
                    return (wizard, Vec::new());
                }
                wizard.error = None;
                wizard.step = wizard.step.next();
                (wizard, Vec::new())
            }
            RegistrationEvent::Prev => {
                wizard.step = wizard.step.prev();
                (wizard, Vec::new())
            }
            RegistrationEvent::SubmitRequested => {
                if wizard.status == SubmissionStatus::Pending {
                    return (wizard, Vec::new());
                }
                wizard.status = SubmissionStatus::Pending;
                wizard.error = None;
                let form = Box::new(wizard.form.clone());
                (wizard, vec![RegistrationAction::SubmitForm(form)])
            }
            RegistrationEvent::SubmitSucceeded => {
                // Fresh form and first step; only the status survives.
                (
                    RegistrationWizard {
                        status: SubmissionStatus::Success,
                        ..RegistrationWizard::default()
                    },
                    Vec::new(),
                )
            }
            RegistrationEvent::SubmitFailed { message } => {
                wizard.status = SubmissionStatus::Failed;
                wizard.error = Some(WizardError::Rejected(message));
                (wizard, Vec::new())
            }
            RegistrationEvent::DismissError => {
                wizard.error = None;
                (wizard, Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::form::RegistrationUpdate;

    fn filled_credentials(password: &str, re_password: &str) -> RegistrationWizard {
        let mut wizard = RegistrationWizard::default();
        wizard.form.full_name = "Alice Example".into();
        wizard.form.username = "alice".into();
        wizard.form.password = password.into();
        wizard.form.re_password = re_password.into();
        wizard
    }

    #[test]
    fn next_blocked_on_password_mismatch() {
        let wizard = filled_credentials("Abc123!", "wrong");
        let (next, actions) = RegistrationMachine::transition(wizard, RegistrationEvent::Next);
        assert_eq!(next.step, RegistrationStep::Credentials);
        assert_eq!(next.error, Some(WizardError::PasswordMismatch));
        assert!(actions.is_empty());
    }

    #[test]
    fn next_advances_when_passwords_match() {
        let wizard = filled_credentials("Abc123!", "Abc123!");
        let (next, _) = RegistrationMachine::transition(wizard, RegistrationEvent::Next);
        assert_eq!(next.step, RegistrationStep::Identity);
        assert_eq!(next.error, None);
    }

    #[test]
    fn step_stays_within_bounds() {
        let mut wizard = filled_credentials("pw", "pw");
        for _ in 0..10 {
            let (next, _) = RegistrationMachine::transition(wizard, RegistrationEvent::Next);
            wizard = next;
        }
        assert_eq!(wizard.step, RegistrationStep::Social);
        assert_eq!(wizard.step.number(), RegistrationStep::COUNT);

        for _ in 0..10 {
            let (next, _) = RegistrationMachine::transition(wizard, RegistrationEvent::Prev);
            wizard = next;
        }
        assert_eq!(wizard.step, RegistrationStep::Credentials);
        assert_eq!(wizard.step.number(), 1);
    }

    #[test]
    fn submit_request_emits_form_action_once() {
        let wizard = filled_credentials("pw", "pw");
        let (pending, actions) =
            RegistrationMachine::transition(wizard, RegistrationEvent::SubmitRequested);
        assert_eq!(pending.status, SubmissionStatus::Pending);
        assert_eq!(actions.len(), 1);

        // A second request while pending is ignored.
        let (still_pending, actions) =
            RegistrationMachine::transition(pending, RegistrationEvent::SubmitRequested);
        assert_eq!(still_pending.status, SubmissionStatus::Pending);
        assert!(actions.is_empty());
    }

    #[test]
    fn submit_success_resets_form_and_step() {
        let mut wizard = filled_credentials("pw", "pw");
        wizard.step = RegistrationStep::Social;
        wizard.status = SubmissionStatus::Pending;
        let (next, _) = RegistrationMachine::transition(wizard, RegistrationEvent::SubmitSucceeded);
        assert_eq!(next.step, RegistrationStep::Credentials);
        assert_eq!(next.status, SubmissionStatus::Success);
        assert_eq!(next.form, Default::default());
    }

    #[test]
    fn submit_failure_retains_message() {
        let mut wizard = filled_credentials("pw", "pw");
        wizard.status = SubmissionStatus::Pending;
        let (next, _) = RegistrationMachine::transition(
            wizard,
            RegistrationEvent::SubmitFailed {
                message: "username already taken".into(),
            },
        );
        assert_eq!(next.status, SubmissionStatus::Failed);
        assert_eq!(
            next.error,
            Some(WizardError::Rejected("username already taken".into()))
        );
        let (cleared, _) = RegistrationMachine::transition(next, RegistrationEvent::DismissError);
        assert_eq!(cleared.error, None);
    }

    #[test]
    fn update_does_not_move_step() {
        let wizard = RegistrationWizard::default();
        let update = RegistrationUpdate {
            username: Some("bob".into()),
            ..Default::default()
        };
        let (next, _) =
            RegistrationMachine::transition(wizard, RegistrationEvent::Update(update));
        assert_eq!(next.step, RegistrationStep::Credentials);
        assert_eq!(next.form.username, "bob");
    }
}
