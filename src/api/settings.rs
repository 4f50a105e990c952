//! Settings-related Tauri commands
//! 设置相关的 Tauri 命令

use std::sync::Arc;

use tauri::State;

use qp_core::settings::model::Settings;

use crate::api::error::map_err;
use crate::bootstrap::AppRuntime;

/// Get application settings
/// 获取应用设置
#[tauri::command]
pub async fn get_settings(runtime: State<'_, Arc<AppRuntime>>) -> Result<Settings, String> {
    let uc = runtime.usecases().get_settings();
    uc.execute().await.map_err(map_err)
}

/// Update application settings
/// 更新应用设置
#[tauri::command]
pub async fn update_settings(
    runtime: State<'_, Arc<AppRuntime>>,
    settings: Settings,
) -> Result<(), String> {
    let uc = runtime.usecases().update_settings();
    uc.execute(settings).await.map_err(map_err)
}

/// Flip the theme and persist it; returns the updated settings.
#[tauri::command]
pub async fn toggle_theme(runtime: State<'_, Arc<AppRuntime>>) -> Result<Settings, String> {
    let uc = runtime.usecases().toggle_theme();
    uc.execute().await.map_err(map_err)
}
