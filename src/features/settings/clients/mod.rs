pub mod settings_client;

pub use settings_client::SettingsClient;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::settings::models::UserSettings;

/// Service contract for the user-settings endpoints.
#[async_trait]
pub trait SettingsApi: Send + Sync {
    async fn fetch(&self, user_id: Uuid) -> Result<UserSettings>;
    async fn update_language(&self, user_id: Uuid, language: &str) -> Result<UserSettings>;
}
