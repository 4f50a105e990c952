//! QuillPad Library
//!
//! 博客桌面客户端：webview 负责页面渲染，会话、向导、远程调用和
//! 持久化都在这里的 Tauri 命令背后完成。

pub mod api;
pub mod bootstrap;

use std::sync::Arc;

// 重新导出常用类型
pub use bootstrap::runtime::AppRuntime;

/// Build and run the Tauri application.
pub fn run() {
    // 注意: 日志系统将在 Builder 插件注册时初始化
    let config = bootstrap::config::load_or_default();

    tauri::Builder::default()
        .plugin(bootstrap::logging::get_builder().build())
        .plugin(tauri_plugin_opener::init())
        .setup(move |app| {
            use tauri::Manager;

            let runtime = Arc::new(bootstrap::wiring::create_runtime(&config)?);

            // Pick up a persisted session before the first page asks for it.
            tauri::async_runtime::block_on(async {
                if let Err(e) = runtime.session().restore().await {
                    log::warn!("session restore failed: {e:#}");
                }
            });

            app.manage(runtime);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            api::auth::login,
            api::auth::logout,
            api::auth::session_state,
            api::auth::send_otp,
            api::auth::reset_password,
            api::auth::password_strength,
            api::registration::registration_state,
            api::registration::update_registration,
            api::registration::registration_next,
            api::registration::registration_prev,
            api::registration::submit_registration,
            api::registration::registration_dismiss_error,
            api::composer::composer_state,
            api::composer::update_post_draft,
            api::composer::composer_next,
            api::composer::composer_prev,
            api::composer::attach_post_picture,
            api::composer::clear_post_picture,
            api::composer::submit_post,
            api::composer::composer_dismiss_error,
            api::feed::fetch_feed,
            api::comments::list_comments,
            api::comments::create_comment,
            api::profile::get_profile,
            api::profile::update_profile,
            api::profile::upload_profile_picture,
            api::profile::view_user_profile,
            api::search::search_users,
            api::settings::get_settings,
            api::settings::update_settings,
            api::settings::toggle_theme,
            api::notice::current_notice,
            api::notice::dismiss_notice,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
