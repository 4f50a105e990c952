use async_trait::async_trait;

/// Durable storage for the session token.
#[async_trait]
pub trait TokenStorePort: Send + Sync {
    /// The persisted token, if any.
    async fn load(&self) -> anyhow::Result<Option<String>>;

    async fn store(&self, token: &str) -> anyhow::Result<()>;

    async fn clear(&self) -> anyhow::Result<()>;
}
