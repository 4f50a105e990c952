//! Application dependency grouping.
//!
//! Not a builder: no build steps, no defaults, no hidden logic. Just a
//! struct that carries the wired ports from bootstrap into the runtime.

use std::sync::Arc;

use qp_core::ports::{BlogApiPort, SettingsPort, TokenStorePort};

pub struct AppDeps {
    /// Remote blog service
    pub api: Arc<dyn BlogApiPort>,

    /// Durable session-token storage
    pub tokens: Arc<dyn TokenStorePort>,

    /// Settings repository
    pub settings: Arc<dyn SettingsPort>,
}
