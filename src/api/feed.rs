//! Feed Tauri commands

use std::sync::Arc;

use tauri::State;

use crate::api::dto::FeedPostDto;
use crate::api::error::map_err;
use crate::bootstrap::AppRuntime;

/// One authoritative fetch of the feed.
///
/// `None` means a newer fetch superseded this one mid-flight; the webview
/// just ignores it.
#[tauri::command]
pub async fn fetch_feed(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<Option<Vec<FeedPostDto>>, String> {
    let uc = runtime.usecases().fetch_feed();
    let posts = uc.execute().await.map_err(map_err)?;
    Ok(posts.map(|posts| posts.into_iter().map(FeedPostDto::from).collect()))
}
