use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{Result, StoreError};
use crate::core::storage::KeyValueStorage;
use crate::features::settings::clients::SettingsApi;
use crate::features::settings::models::UserSettings;
use crate::shared::constants::LANG_KEY;

#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    pub settings: Option<UserSettings>,
    pub loading: bool,
    pub error: Option<StoreError>,
}

/// Store for the current user's portal settings.
///
/// Loaded by the session store right after login; the language preference is
/// also written through to the plain `lang` storage key so the sign-in screen
/// can render in the right language before authentication.
pub struct SettingsStore {
    api: Arc<dyn SettingsApi>,
    storage: Arc<dyn KeyValueStorage>,
    state: RwLock<SettingsState>,
}

impl SettingsStore {
    pub fn new(api: Arc<dyn SettingsApi>, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            api,
            storage,
            state: RwLock::new(SettingsState::default()),
        }
    }

    pub async fn state(&self) -> SettingsState {
        self.state.read().await.clone()
    }

    /// Pre-auth language, from the plain `lang` key.
    pub fn stored_language(&self) -> Option<String> {
        self.storage.get(LANG_KEY).unwrap_or_default()
    }

    /// Fetch settings for the given user. Read action: errors are recorded
    /// in state, not rethrown.
    pub async fn load_for(&self, user_id: Uuid) -> Result<()> {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        match self.api.fetch(user_id).await {
            Ok(settings) => {
                if let Err(e) = self.storage.put(LANG_KEY, &settings.language) {
                    tracing::warn!("Failed to persist language preference: {}", e);
                }
                let mut state = self.state.write().await;
                state.settings = Some(settings);
                state.loading = false;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to load user settings: {}", e);
                let mut state = self.state.write().await;
                state.error = Some(StoreError::from(&e));
                state.loading = false;
                Ok(())
            }
        }
    }

    /// Change the language preference. Write action: records and rethrows.
    pub async fn set_language(&self, user_id: Uuid, language: &str) -> Result<UserSettings> {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        match self.api.update_language(user_id, language).await {
            Ok(settings) => {
                self.storage.put(LANG_KEY, &settings.language)?;
                let mut state = self.state.write().await;
                state.settings = Some(settings.clone());
                state.loading = false;
                Ok(settings)
            }
            Err(e) => {
                let mut state = self.state.write().await;
                state.error = Some(StoreError::from(&e));
                state.loading = false;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::core::storage::MemoryStorage;
    use async_trait::async_trait;

    struct FakeSettingsApi;

    #[async_trait]
    impl SettingsApi for FakeSettingsApi {
        async fn fetch(&self, _user_id: Uuid) -> Result<UserSettings> {
            Ok(UserSettings {
                language: "fr".to_string(),
            })
        }

        async fn update_language(&self, _user_id: Uuid, language: &str) -> Result<UserSettings> {
            Ok(UserSettings {
                language: language.to_string(),
            })
        }
    }

    struct FailingSettingsApi;

    #[async_trait]
    impl SettingsApi for FailingSettingsApi {
        async fn fetch(&self, _user_id: Uuid) -> Result<UserSettings> {
            Err(AppError::Status {
                status: 500,
                message: "boom".to_string(),
            })
        }

        async fn update_language(&self, _user_id: Uuid, _language: &str) -> Result<UserSettings> {
            Err(AppError::Status {
                status: 500,
                message: "boom".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_load_persists_lang_key() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SettingsStore::new(Arc::new(FakeSettingsApi), storage.clone());

        store.load_for(Uuid::new_v4()).await.unwrap();

        assert_eq!(storage.get(LANG_KEY).unwrap().as_deref(), Some("fr"));
        let state = store.state().await;
        assert_eq!(state.settings.unwrap().language, "fr");
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_load_failure_recorded_not_rethrown() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SettingsStore::new(Arc::new(FailingSettingsApi), storage.clone());

        assert!(store.load_for(Uuid::new_v4()).await.is_ok());

        let state = store.state().await;
        assert_eq!(state.error.as_ref().unwrap().status, Some(500));
        assert!(state.settings.is_none());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_set_language_updates_state_and_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SettingsStore::new(Arc::new(FakeSettingsApi), storage.clone());

        let settings = store.set_language(Uuid::new_v4(), "en").await.unwrap();

        assert_eq!(settings.language, "en");
        assert_eq!(storage.get(LANG_KEY).unwrap().as_deref(), Some("en"));
        assert_eq!(store.stored_language().as_deref(), Some("en"));
    }

    #[tokio::test]
    async fn test_set_language_failure_rethrows() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SettingsStore::new(Arc::new(FailingSettingsApi), storage.clone());

        let err = store.set_language(Uuid::new_v4(), "en").await.unwrap_err();
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(storage.get(LANG_KEY).unwrap(), None);
    }
}
