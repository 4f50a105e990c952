//! Use case for getting application settings
//! 获取应用设置的用例

use std::sync::Arc;

use anyhow::Result;

use qp_core::ports::SettingsPort;
use qp_core::settings::model::Settings;

pub struct GetSettings {
    settings: Arc<dyn SettingsPort>,
}

impl GetSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self) -> Result<Settings> {
        self.settings.load().await
    }
}
