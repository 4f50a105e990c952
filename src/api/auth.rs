//! Auth-related Tauri commands
//! 认证相关的 Tauri 命令

use std::sync::Arc;

use tauri::State;

use crate::api::dto::SessionDto;
use crate::api::error::map_err;
use crate::bootstrap::AppRuntime;

/// Exchange credentials for a session.
#[tauri::command]
pub async fn login(
    runtime: State<'_, Arc<AppRuntime>>,
    username: String,
    password: String,
) -> Result<SessionDto, String> {
    let uc = runtime.usecases().login();
    let session = uc.execute(&username, &password).await.map_err(map_err)?;
    Ok(session.into())
}

/// Drop the session; the webview then navigates to a public route.
#[tauri::command]
pub async fn logout(runtime: State<'_, Arc<AppRuntime>>) -> Result<SessionDto, String> {
    let uc = runtime.usecases().logout();
    let session = uc.execute().await.map_err(map_err)?;
    Ok(session.into())
}

/// The current session, as restored at boot or changed since.
#[tauri::command]
pub async fn session_state(runtime: State<'_, Arc<AppRuntime>>) -> Result<SessionDto, String> {
    Ok(runtime.session().snapshot().await.into())
}

/// Request a password-reset OTP for an email address.
#[tauri::command]
pub async fn send_otp(
    runtime: State<'_, Arc<AppRuntime>>,
    email: String,
) -> Result<String, String> {
    let uc = runtime.usecases().send_otp();
    uc.execute(&email).await.map_err(map_err)
}

/// Validate the OTP and set the new password.
#[tauri::command]
pub async fn reset_password(
    runtime: State<'_, Arc<AppRuntime>>,
    otp: String,
    new_password: String,
) -> Result<String, String> {
    let uc = runtime.usecases().reset_password();
    uc.execute(&otp, &new_password).await.map_err(map_err)
}

/// Strength score (0–4) for the password meter on the reset page.
#[tauri::command]
pub fn password_strength(candidate: String) -> u8 {
    qp_core::validation::password_strength(&candidate)
}
