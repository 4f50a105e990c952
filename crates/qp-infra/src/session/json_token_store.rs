//! Durable session-token storage.
//!
//! 会话令牌的持久化存储。

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use qp_core::ports::TokenStorePort;

/// On-disk shape of `session.json`.
#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    token: String,
    saved_at: DateTime<Utc>,
}

/// Stores the auth token as a small JSON file in the config directory.
///
/// Writes go through a temp file and rename so the stored token is always
/// either the previous one or the complete new one.
pub struct JsonTokenStore {
    path: PathBuf,
}

impl JsonTokenStore {
    pub fn new(config_dir: PathBuf) -> Self {
        Self {
            path: config_dir.join("session.json"),
        }
    }
}

#[async_trait]
impl TokenStorePort for JsonTokenStore {
    async fn load(&self) -> Result<Option<String>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read session file failed: {}", self.path.display()))
            }
        };

        let file: SessionFile = serde_json::from_str(&content)
            .with_context(|| format!("parse session file failed: {}", self.path.display()))?;
        Ok(Some(file.token))
    }

    async fn store(&self, token: &str) -> Result<()> {
        let file = SessionFile {
            token: token.to_string(),
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&file).context("serialize session failed")?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .with_context(|| format!("write temp session failed: {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("rename temp session failed: {}", self.path.display()))?;
        debug!("session token stored");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!("session token removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("remove session file failed: {}", self.path.display())),
        }
    }
}
