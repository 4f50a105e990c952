//! Port traits implemented by the outer layers.

pub mod api;
pub mod errors;
pub mod settings;
pub mod token_store;

pub use api::{BlogApiPort, OtpIssued};
pub use errors::ApiError;
pub use settings::SettingsPort;
pub use token_store::TokenStorePort;
