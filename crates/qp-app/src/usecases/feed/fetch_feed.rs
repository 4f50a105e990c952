//! Use case for loading the feed.
//! 加载信息流的用例。

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info_span, Instrument};

use qp_core::blog::Post;
use qp_core::ports::BlogApiPort;

use crate::gate::RequestGate;
use crate::session::SessionStore;

/// One authoritative fetch of the feed.
///
/// Returns `None` when a newer fetch superseded this one while it was in
/// flight; the caller simply drops the result.
pub struct FetchFeed {
    api: Arc<dyn BlogApiPort>,
    session: Arc<SessionStore>,
    gate: Arc<RequestGate>,
}

impl FetchFeed {
    pub fn new(
        api: Arc<dyn BlogApiPort>,
        session: Arc<SessionStore>,
        gate: Arc<RequestGate>,
    ) -> Self {
        Self { api, session, gate }
    }

    pub async fn execute(&self) -> Result<Option<Vec<Post>>> {
        let span = info_span!("usecase.feed.fetch");
        async {
            let token = self.session.bearer().await?;
            let generation = self.gate.begin();
            let posts = self.api.fetch_feed(&token).await?;
            if !self.gate.is_current(generation) {
                debug!(generation, "stale feed response dropped");
                return Ok(None);
            }
            debug!(count = posts.len(), "feed loaded");
            Ok(Some(posts))
        }
        .instrument(span)
        .await
    }
}
