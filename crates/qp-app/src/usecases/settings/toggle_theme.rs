use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use qp_core::ports::SettingsPort;
use qp_core::settings::model::Settings;

/// Flips the theme and persists the new value.
pub struct ToggleTheme {
    settings: Arc<dyn SettingsPort>,
}

impl ToggleTheme {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self) -> Result<Settings> {
        let mut settings = self.settings.load().await?;
        settings.general.theme = settings.general.theme.toggled();
        self.settings.save(&settings).await?;
        info!(dark = settings.general.theme.is_dark(), "theme toggled");
        Ok(settings)
    }
}
