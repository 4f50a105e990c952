//! Application bootstrap: configuration, logging and dependency wiring.

pub mod config;
pub mod logging;
pub mod runtime;
pub mod wiring;

pub use config::load_or_default;
pub use runtime::AppRuntime;
pub use wiring::create_runtime;
