pub mod json_token_store;

pub use json_token_store::JsonTokenStore;
