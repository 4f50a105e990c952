pub mod get_settings;
pub mod toggle_theme;
pub mod update_settings;

pub use get_settings::GetSettings;
pub use toggle_theme::ToggleTheme;
pub use update_settings::UpdateSettings;
