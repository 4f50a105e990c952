//! Transient notice Tauri commands

use std::sync::Arc;

use tauri::State;

use qp_app::Notice;

use crate::bootstrap::AppRuntime;

/// The banner currently on display, if any. Notices clear themselves
/// after a fixed delay; polling this is enough for the webview.
#[tauri::command]
pub async fn current_notice(runtime: State<'_, Arc<AppRuntime>>) -> Result<Option<Notice>, String> {
    Ok(runtime.notices().current().await)
}

#[tauri::command]
pub async fn dismiss_notice(runtime: State<'_, Arc<AppRuntime>>) -> Result<(), String> {
    runtime.notices().dismiss().await;
    Ok(())
}
