//! # qp-infra
//!
//! Infrastructure adapters for QuillPad: durable session-token storage,
//! the settings file repository and platform path resolution.

pub mod fs;
pub mod session;
pub mod settings;

pub use session::JsonTokenStore;
pub use settings::FileSettingsRepository;
