//! # Configuration Loader / 配置加载器
//!
//! Pure data loading: read the TOML file, map it into [`AppConfig`].
//! No validation, no business rules — accept whatever is in the file.
//! 仅纯数据加载，不做验证。

use std::path::Path;

use anyhow::{Context, Result};

use qp_core::config::AppConfig;

pub const CONFIG_FILE_NAME: &str = "quillpad.toml";

/// Load configuration from a TOML file.
///
/// Missing sections fall back to their defaults; a present-but-broken
/// file is an error the caller decides about.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content).context("Failed to parse config as TOML")
}

/// The effective configuration at startup.
///
/// Looks for `quillpad.toml` in the app config dir; a missing file means
/// defaults, a malformed one is logged and ignored.
pub fn load_or_default() -> AppConfig {
    let path = match qp_infra::fs::config_dir() {
        Ok(dir) => dir.join(CONFIG_FILE_NAME),
        Err(e) => {
            log::warn!("config dir unavailable, using defaults: {e:#}");
            return AppConfig::default();
        }
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match load_config(&path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("加载配置失败: {e:#}");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn full_config_parses() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"https://blog.example.com\"\ntimeout_secs = 10"
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://blog.example.com");
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://127.0.0.1:9000\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [").unwrap();
        assert!(load_config(file.path()).is_err());
    }
}
