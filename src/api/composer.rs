//! Post composer Tauri commands
//! 发帖向导相关的 Tauri 命令

use std::path::PathBuf;
use std::sync::Arc;

use tauri::State;

use qp_core::composer::{media_type_for, ComposerEvent, DraftUpdate, PictureFile};

use crate::api::dto::ComposerStateDto;
use crate::api::error::map_err;
use crate::bootstrap::AppRuntime;

#[tauri::command]
pub async fn composer_state(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<ComposerStateDto, String> {
    Ok(runtime.composer().snapshot().await.into())
}

#[tauri::command]
pub async fn update_post_draft(
    runtime: State<'_, Arc<AppRuntime>>,
    update: DraftUpdate,
) -> Result<ComposerStateDto, String> {
    let snapshot = runtime
        .composer()
        .apply(ComposerEvent::Update(update))
        .await;
    Ok(snapshot.into())
}

#[tauri::command]
pub async fn composer_next(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<ComposerStateDto, String> {
    Ok(runtime.composer().apply(ComposerEvent::Next).await.into())
}

#[tauri::command]
pub async fn composer_prev(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<ComposerStateDto, String> {
    Ok(runtime.composer().apply(ComposerEvent::Prev).await.into())
}

/// Stage a picture from disk; it is transmitted only at final submit.
#[tauri::command]
pub async fn attach_post_picture(
    runtime: State<'_, Arc<AppRuntime>>,
    path: String,
) -> Result<ComposerStateDto, String> {
    let picture = read_picture(&path).await?;
    Ok(runtime.composer().attach(picture).await.into())
}

#[tauri::command]
pub async fn clear_post_picture(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<ComposerStateDto, String> {
    Ok(runtime.composer().clear_picture().await.into())
}

/// Submit the draft, with the staged picture when one exists.
#[tauri::command]
pub async fn submit_post(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<ComposerStateDto, String> {
    let snapshot = runtime.composer().submit().await.map_err(map_err)?;
    Ok(snapshot.into())
}

/// Clear the inline wizard error once its banner has expired.
#[tauri::command]
pub async fn composer_dismiss_error(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<ComposerStateDto, String> {
    let snapshot = runtime
        .composer()
        .apply(ComposerEvent::DismissError)
        .await;
    Ok(snapshot.into())
}

async fn read_picture(path: &str) -> Result<PictureFile, String> {
    let file_path = PathBuf::from(path);
    let file_name = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| format!("not a file path: {path}"))?
        .to_string();
    let bytes = tokio::fs::read(&file_path)
        .await
        .map_err(|e| format!("read picture failed: {e}"))?;
    let media_type = media_type_for(&file_name);
    Ok(PictureFile {
        file_name,
        media_type,
        bytes,
    })
}
