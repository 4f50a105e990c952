//! Registration wizard Tauri commands
//! 注册向导相关的 Tauri 命令

use std::sync::Arc;

use tauri::State;

use qp_core::registration::{RegistrationEvent, RegistrationUpdate};

use crate::api::dto::RegistrationStateDto;
use crate::bootstrap::AppRuntime;

#[tauri::command]
pub async fn registration_state(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<RegistrationStateDto, String> {
    Ok(runtime.registration().snapshot().await.into())
}

/// Merge edited fields into the form without moving the step.
#[tauri::command]
pub async fn update_registration(
    runtime: State<'_, Arc<AppRuntime>>,
    update: RegistrationUpdate,
) -> Result<RegistrationStateDto, String> {
    let wizard = runtime
        .registration()
        .apply(RegistrationEvent::Update(update))
        .await;
    Ok(wizard.into())
}

/// Advance the wizard; blocked on step 1 until the passwords match.
#[tauri::command]
pub async fn registration_next(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<RegistrationStateDto, String> {
    let wizard = runtime.registration().apply(RegistrationEvent::Next).await;
    Ok(wizard.into())
}

#[tauri::command]
pub async fn registration_prev(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<RegistrationStateDto, String> {
    let wizard = runtime.registration().apply(RegistrationEvent::Prev).await;
    Ok(wizard.into())
}

/// Submit the form; the outcome lands in the returned wizard state.
#[tauri::command]
pub async fn submit_registration(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<RegistrationStateDto, String> {
    Ok(runtime.registration().submit().await.into())
}

/// Clear the inline wizard error once its banner has expired.
#[tauri::command]
pub async fn registration_dismiss_error(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<RegistrationStateDto, String> {
    let wizard = runtime
        .registration()
        .apply(RegistrationEvent::DismissError)
        .await;
    Ok(wizard.into())
}
