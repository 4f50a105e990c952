//! Comment Tauri commands

use std::sync::Arc;

use tauri::State;

use qp_core::blog::Comment;

use crate::api::error::map_err;
use crate::bootstrap::AppRuntime;

#[tauri::command]
pub async fn list_comments(
    runtime: State<'_, Arc<AppRuntime>>,
    post_id: u64,
) -> Result<Vec<Comment>, String> {
    let uc = runtime.usecases().list_comments();
    uc.execute(post_id).await.map_err(map_err)
}

/// Post a comment. Whitespace-only input is a no-op and returns `false`.
#[tauri::command]
pub async fn create_comment(
    runtime: State<'_, Arc<AppRuntime>>,
    post_id: u64,
    content: String,
) -> Result<bool, String> {
    let uc = runtime.usecases().create_comment();
    uc.execute(post_id, &content).await.map_err(map_err)
}
