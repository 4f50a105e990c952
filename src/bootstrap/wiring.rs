//! # Dependency Injection / 依赖注入模块
//!
//! Creates the concrete infra and network implementations and injects
//! them into the runtime. This is the only place allowed to depend on
//! `qp-infra` and `qp-network` at the same time — assembly only, no
//! business decisions.
//! 这是唯一允许同时依赖 qp-infra 和 qp-network 的地方，仅用于组装。

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use qp_app::AppDeps;
use qp_core::config::AppConfig;
use qp_infra::{FileSettingsRepository, JsonTokenStore};
use qp_network::RestClient;

use super::runtime::AppRuntime;

/// Assemble the runtime against the platform config directory.
pub fn create_runtime(config: &AppConfig) -> Result<AppRuntime> {
    let data_dir = qp_infra::fs::config_dir()?;
    create_runtime_in(config, &data_dir)
}

/// Assemble the runtime with every file rooted at `data_dir`.
///
/// Split out so tests can wire a real runtime against a temp directory.
pub fn create_runtime_in(config: &AppConfig, data_dir: &Path) -> Result<AppRuntime> {
    let api = Arc::new(RestClient::new(&config.api)?);
    let tokens = Arc::new(JsonTokenStore::new(data_dir.to_path_buf()));
    let settings = Arc::new(FileSettingsRepository::new(data_dir.join("settings.json")));

    let deps = AppDeps {
        api,
        tokens,
        settings,
    };
    Ok(AppRuntime::new(deps))
}
