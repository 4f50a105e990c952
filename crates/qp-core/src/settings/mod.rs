pub mod defaults;
pub mod model;

pub use model::{GeneralSettings, Settings, Theme, CURRENT_SCHEMA_VERSION};
