//! Use case for updating application settings
//! 更新应用设置的用例

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use qp_core::ports::SettingsPort;
use qp_core::settings::model::{Settings, CURRENT_SCHEMA_VERSION};

pub struct UpdateSettings {
    settings: Arc<dyn SettingsPort>,
}

impl UpdateSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self, settings: Settings) -> Result<()> {
        let span = info_span!("usecase.settings.update");
        async {
            if settings.schema_version != CURRENT_SCHEMA_VERSION {
                return Err(anyhow::anyhow!(
                    "Invalid schema version: expected {}, got {}",
                    CURRENT_SCHEMA_VERSION,
                    settings.schema_version
                ));
            }

            self.settings.save(&settings).await?;
            info!("settings updated");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
