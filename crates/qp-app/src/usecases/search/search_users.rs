//! Use case for searching users by username.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info_span, Instrument};

use qp_core::blog::UserSummary;
use qp_core::ports::BlogApiPort;

use crate::gate::RequestGate;
use crate::session::SessionStore;

/// Searches users by (partial) username.
///
/// Returns `None` without touching the network when the term is blank,
/// and `None` when a newer search superseded this one in flight. An empty
/// `Some` list is a real "no users found" answer.
pub struct SearchUsers {
    api: Arc<dyn BlogApiPort>,
    session: Arc<SessionStore>,
    gate: Arc<RequestGate>,
}

impl SearchUsers {
    pub fn new(
        api: Arc<dyn BlogApiPort>,
        session: Arc<SessionStore>,
        gate: Arc<RequestGate>,
    ) -> Self {
        Self { api, session, gate }
    }

    pub async fn execute(&self, term: &str) -> Result<Option<Vec<UserSummary>>> {
        let span = info_span!("usecase.search.users");
        async {
            let term = term.trim();
            if term.is_empty() {
                debug!("blank search term ignored");
                return Ok(None);
            }

            let token = self.session.bearer().await?;
            let generation = self.gate.begin();
            let users = self.api.search_users(&token, term).await?;
            if !self.gate.is_current(generation) {
                debug!(generation, "stale search response dropped");
                return Ok(None);
            }
            debug!(count = users.len(), "search finished");
            Ok(Some(users))
        }
        .instrument(span)
        .await
    }
}
