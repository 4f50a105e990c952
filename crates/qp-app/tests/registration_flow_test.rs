mod common;

use std::sync::Arc;

use common::StubApi;
use qp_app::flows::RegistrationFlow;
use qp_app::{NoticeBoard, NoticeKind};
use qp_core::ports::ApiError;
use qp_core::registration::{
    RegistrationEvent, RegistrationStep, RegistrationUpdate, SubmissionStatus, WizardError,
};

fn credentials_update(password: &str, re_password: &str) -> RegistrationEvent {
    RegistrationEvent::Update(RegistrationUpdate {
        full_name: Some("Alice Example".into()),
        username: Some("alice".into()),
        password: Some(password.into()),
        re_password: Some(re_password.into()),
        ..Default::default()
    })
}

#[tokio::test]
async fn mismatched_passwords_block_the_first_step() {
    let api = StubApi::new();
    let flow = RegistrationFlow::new(api.clone(), Arc::new(NoticeBoard::new()));

    flow.apply(credentials_update("Abc123!", "wrong")).await;
    let wizard = flow.apply(RegistrationEvent::Next).await;

    assert_eq!(wizard.step, RegistrationStep::Credentials);
    assert_eq!(wizard.error, Some(WizardError::PasswordMismatch));

    // Fixing the confirmation unblocks the step.
    flow.apply(credentials_update("Abc123!", "Abc123!")).await;
    let wizard = flow.apply(RegistrationEvent::Next).await;
    assert_eq!(wizard.step, RegistrationStep::Identity);
    assert_eq!(wizard.error, None);
}

#[tokio::test]
async fn successful_submit_resets_wizard_and_posts_once() {
    let api = StubApi::new();
    let notices = Arc::new(NoticeBoard::new());
    let flow = RegistrationFlow::new(api.clone(), notices.clone());

    flow.apply(credentials_update("Abc123!", "Abc123!")).await;
    flow.apply(RegistrationEvent::Next).await;
    flow.apply(RegistrationEvent::Next).await;

    let wizard = flow.submit().await;

    assert_eq!(api.calls().await, vec!["register:alice"]);
    assert_eq!(wizard.status, SubmissionStatus::Success);
    assert_eq!(wizard.step, RegistrationStep::Credentials);
    assert_eq!(wizard.form.username, "");

    let notice = notices.current().await.expect("success notice");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, "Registration successful!");
}

#[tokio::test]
async fn rejected_submit_keeps_form_and_records_server_message() {
    let api = StubApi::new();
    let notices = Arc::new(NoticeBoard::new());
    let flow = RegistrationFlow::new(api.clone(), notices.clone());

    flow.apply(credentials_update("Abc123!", "Abc123!")).await;
    api.fail_next_with(ApiError::Status {
        code: 409,
        message: "username already taken".into(),
    })
    .await;

    let wizard = flow.submit().await;

    assert_eq!(wizard.status, SubmissionStatus::Failed);
    assert_eq!(
        wizard.error,
        Some(WizardError::Rejected("username already taken".into()))
    );
    // The typed-in form survives a rejection.
    assert_eq!(wizard.form.username, "alice");

    let notice = notices.current().await.expect("error notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "username already taken");
}
