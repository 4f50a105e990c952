//! Transient user-visible notices.
//!
//! One banner at a time, auto-cleared after a fixed delay. The clear runs
//! on a spawned task whose `AbortHandle` is kept, so a superseding notice
//! or an explicit dismiss cancels the pending clear instead of letting a
//! dead timer fire later.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tokio::time::sleep;
use tracing::debug;

/// How long a banner stays up before it clears itself.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Default)]
struct Slot {
    seq: u64,
    current: Option<Notice>,
    pending_clear: Option<AbortHandle>,
}

pub struct NoticeBoard {
    slot: Arc<Mutex<Slot>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
        }
    }

    pub async fn publish(&self, kind: NoticeKind, message: impl Into<String>) {
        self.publish_with_ttl(kind, message, NOTICE_TTL).await;
    }

    pub async fn publish_with_ttl(
        &self,
        kind: NoticeKind,
        message: impl Into<String>,
        ttl: Duration,
    ) {
        let mut slot = self.slot.lock().await;
        if let Some(handle) = slot.pending_clear.take() {
            handle.abort();
        }
        slot.seq += 1;
        let seq = slot.seq;
        let message = message.into();
        debug!(%message, "notice published");
        slot.current = Some(Notice { kind, message });

        let shared = Arc::clone(&self.slot);
        let task = tokio::spawn(async move {
            sleep(ttl).await;
            let mut slot = shared.lock().await;
            // Only clear if no newer notice replaced this one meanwhile.
            if slot.seq == seq {
                slot.current = None;
                slot.pending_clear = None;
            }
        });
        slot.pending_clear = Some(task.abort_handle());
    }

    pub async fn dismiss(&self) {
        let mut slot = self.slot.lock().await;
        if let Some(handle) = slot.pending_clear.take() {
            handle.abort();
        }
        slot.current = None;
    }

    pub async fn current(&self) -> Option<Notice> {
        self.slot.lock().await.current.clone()
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}
