//! Registration wizard domain.
//!
//! 注册向导领域模型。

pub mod form;
pub mod machine;

pub use form::{RegistrationForm, RegistrationUpdate};
pub use machine::{
    RegistrationAction, RegistrationEvent, RegistrationMachine, RegistrationStep,
    RegistrationWizard, SubmissionStatus, WizardError,
};
