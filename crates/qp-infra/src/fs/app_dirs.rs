//! Application directory resolution.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "quillpad";

/// The platform config directory for QuillPad, created on first use.
///
/// - macOS: `~/Library/Application Support/quillpad`
/// - Linux: `~/.config/quillpad`
/// - Windows: `%APPDATA%\quillpad`
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("no platform config directory available")?;
    let dir = base.join(APP_DIR_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create config dir failed: {}", dir.display()))?;
    Ok(dir)
}
