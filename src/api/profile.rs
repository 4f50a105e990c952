//! Profile Tauri commands
//! 个人资料相关的 Tauri 命令

use std::path::PathBuf;
use std::sync::Arc;

use tauri::State;

use qp_core::blog::{ProfileUpdate, UserProfile, UserProfileView};
use qp_core::composer::{media_type_for, PictureFile};

use crate::api::error::map_err;
use crate::bootstrap::AppRuntime;

/// The authenticated user's own profile.
#[tauri::command]
pub async fn get_profile(runtime: State<'_, Arc<AppRuntime>>) -> Result<UserProfile, String> {
    let uc = runtime.usecases().get_profile();
    uc.execute().await.map_err(map_err)
}

/// Save the edited profile; returns the server confirmation message.
#[tauri::command]
pub async fn update_profile(
    runtime: State<'_, Arc<AppRuntime>>,
    update: ProfileUpdate,
) -> Result<String, String> {
    let uc = runtime.usecases().update_profile();
    uc.execute(&update).await.map_err(map_err)
}

/// Upload a new profile picture from a file on disk.
#[tauri::command]
pub async fn upload_profile_picture(
    runtime: State<'_, Arc<AppRuntime>>,
    path: String,
) -> Result<String, String> {
    let file_path = PathBuf::from(&path);
    let file_name = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| format!("not a file path: {path}"))?
        .to_string();
    let bytes = tokio::fs::read(&file_path)
        .await
        .map_err(|e| format!("read picture failed: {e}"))?;
    let picture = PictureFile {
        media_type: media_type_for(&file_name),
        file_name,
        bytes,
    };

    let uc = runtime.usecases().upload_profile_picture();
    uc.execute(&picture).await.map_err(map_err)
}

/// Another user's profile page: profile plus their posts.
#[tauri::command]
pub async fn view_user_profile(
    runtime: State<'_, Arc<AppRuntime>>,
    user_id: u64,
) -> Result<UserProfileView, String> {
    let uc = runtime.usecases().view_user_profile();
    uc.execute(user_id).await.map_err(map_err)
}
