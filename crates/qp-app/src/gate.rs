//! Stale-response guard for page fetches.
//!
//! A fetch takes a generation number when it starts; by the time its
//! response arrives, a newer fetch may have begun (the user re-submitted a
//! search, or left the page). Responses from a superseded generation are
//! discarded instead of overwriting newer state.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RequestGate {
    current: AtomicU64,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch and get its generation.
    pub fn begin(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a fetch begun at `generation` is still the latest.
    pub fn is_current(&self, generation: u64) -> bool {
        self.current.load(Ordering::SeqCst) == generation
    }
}

#[cfg(test)]
mod tests {
    use super::RequestGate;

    #[test]
    fn newest_generation_wins() {
        let gate = RequestGate::new();
        let first = gate.begin();
        assert!(gate.is_current(first));

        let second = gate.begin();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }
}
