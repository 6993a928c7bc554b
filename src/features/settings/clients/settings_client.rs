use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::settings::clients::SettingsApi;
use crate::features::settings::models::UserSettings;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateLanguageRequest<'a> {
    language: &'a str,
}

/// HTTP client for the user-settings endpoints.
pub struct SettingsClient {
    api: Arc<ApiClient>,
}

impl SettingsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SettingsApi for SettingsClient {
    async fn fetch(&self, user_id: Uuid) -> Result<UserSettings> {
        self.api.get(&format!("/users/{}/settings", user_id)).await
    }

    async fn update_language(&self, user_id: Uuid, language: &str) -> Result<UserSettings> {
        self.api
            .put(
                &format!("/users/{}/settings/language", user_id),
                &UpdateLanguageRequest { language },
            )
            .await
    }
}
