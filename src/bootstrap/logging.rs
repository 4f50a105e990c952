//! Logging configuration for QuillPad
//!
//! Provides the logging builder configured for both development and
//! production environments, following the Tauri plugin logging practices.
//!
//! ## Environment Behavior
//!
//! - **Development**: Debug level, outputs to Webview console
//! - **Production**: Info level, outputs to log file + stdout

use log::LevelFilter;
use tauri_plugin_log::{Target, TargetKind, TimezoneStrategy};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Create the logging builder with appropriate configuration
///
/// - Development: Debug level, Webview console output
/// - Production: Info level, file + stdout output
/// - Filters noise from Tauri internals and the underlying WebView
pub fn get_builder() -> tauri_plugin_log::Builder {
    let is_dev = is_development();
    let default_log_level = if is_dev {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = tauri_plugin_log::Builder::new()
        .timezone_strategy(TimezoneStrategy::UseLocal)
        .level(default_log_level)
        // Quiet the HTTP stack; request logging happens at our layer.
        .level_for("hyper", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
        // Filter out tauri-plugin-log's own logs to avoid infinite loops
        // Webview target sends logs via log://log events, which would trigger themselves
        .filter(move |metadata| {
            // Skip tauri internal event logs (app::emit, window::emit, etc.)
            // Skip wry noise logs (underlying WebView library)
            let is_basic_noise = metadata.target().starts_with("tauri::")
                || metadata.target().contains("tauri-")
                || metadata.target().starts_with("wry::");

            if is_dev {
                // Development: Keep ipc::request logs for debugging
                !is_basic_noise
            } else {
                // Production: Filter ipc::request logs
                !is_basic_noise && !metadata.target().contains("ipc::request")
            }
        });

    if is_dev {
        builder = builder.target(Target::new(TargetKind::Webview));
    } else {
        builder = builder
            .target(Target::new(TargetKind::LogDir { file_name: None }))
            .target(Target::new(TargetKind::Stdout));
    }

    builder
}
