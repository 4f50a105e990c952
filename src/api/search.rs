//! User search Tauri commands

use std::sync::Arc;

use tauri::State;

use qp_core::blog::UserSummary;

use crate::api::error::map_err;
use crate::bootstrap::AppRuntime;

/// Search users by (partial) username.
///
/// A blank term issues no request and returns `None`; an empty `Some`
/// list is a real "no users found" answer.
#[tauri::command]
pub async fn search_users(
    runtime: State<'_, Arc<AppRuntime>>,
    term: String,
) -> Result<Option<Vec<UserSummary>>, String> {
    let uc = runtime.usecases().search_users();
    uc.execute(&term).await.map_err(map_err)
}
