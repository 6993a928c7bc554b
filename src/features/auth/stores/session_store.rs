use std::sync::{Arc, RwLock};

use validator::Validate;

use crate::core::error::{AppError, Result, StoreError};
use crate::core::http::ApiClient;
use crate::core::storage::KeyValueStorage;
use crate::features::auth::clients::AuthApi;
use crate::features::auth::dtos::{LoginRequest, SessionSnapshot};
use crate::features::auth::models::User;
use crate::features::settings::SettingsStore;
use crate::shared::constants::{AUTH_SESSION_KEY, TOKEN_KEY};

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<StoreError>,
}

/// Store for the current auth session.
///
/// Owns the bearer token lifecycle: login persists the token to durable
/// storage and injects it into the shared [`ApiClient`]; logout clears both
/// synchronously with no network call.
///
/// State lives behind a sync lock (never held across an await) so `logout`
/// and `hydrate` stay synchronous.
pub struct SessionStore {
    auth_api: Arc<dyn AuthApi>,
    api_client: Arc<ApiClient>,
    storage: Arc<dyn KeyValueStorage>,
    settings: Arc<SettingsStore>,
    state: RwLock<SessionState>,
}

impl SessionStore {
    pub fn new(
        auth_api: Arc<dyn AuthApi>,
        api_client: Arc<ApiClient>,
        storage: Arc<dyn KeyValueStorage>,
        settings: Arc<SettingsStore>,
    ) -> Self {
        Self {
            auth_api,
            api_client,
            storage,
            settings,
            state: RwLock::new(SessionState::default()),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.read().expect("session state lock poisoned").clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .expect("session state lock poisoned")
            .is_authenticated
    }

    fn update_state(&self, f: impl FnOnce(&mut SessionState)) {
        let mut state = self.state.write().expect("session state lock poisoned");
        f(&mut state);
    }

    /// Authenticate and establish the session.
    ///
    /// On success the token is persisted, the user profile is fetched and the
    /// dependent settings load is triggered (best-effort). On failure the
    /// error is recorded keyed by HTTP status when available and rethrown;
    /// any previously stored token and user are left untouched.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<User> {
        credentials
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.update_state(|state| {
            state.loading = true;
            state.error = None;
        });

        match self.establish_session(credentials).await {
            Ok(user) => {
                self.update_state(|state| {
                    state.user = Some(user.clone());
                    state.is_authenticated = true;
                    state.loading = false;
                });

                // Dependent load of user settings; login already succeeded,
                // so a settings failure only gets logged.
                if self.settings.load_for(user.id).await.is_err() {
                    tracing::warn!("Settings load after login failed for {}", user.id);
                }

                tracing::info!("Logged in: {}", user.email);
                Ok(user)
            }
            Err(e) => {
                let snapshot = StoreError::from(&e);
                self.update_state(|state| {
                    state.is_authenticated = false;
                    state.error = Some(snapshot);
                    state.loading = false;
                });
                Err(e)
            }
        }
    }

    async fn establish_session(&self, credentials: &LoginRequest) -> Result<User> {
        let response = self.auth_api.login(credentials).await?;

        self.storage.put(TOKEN_KEY, &response.token)?;
        self.api_client.set_token(&response.token);

        let user = self.auth_api.me().await?;

        let snapshot = SessionSnapshot {
            token: response.token,
            user: user.clone(),
        };
        self.storage
            .put(AUTH_SESSION_KEY, &serde_json::to_string(&snapshot)?)?;

        Ok(user)
    }

    /// Clear the session: durable keys, the shared token slot and local
    /// state. Synchronous, no network call.
    pub fn logout(&self) {
        for key in [TOKEN_KEY, AUTH_SESSION_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!("Failed to clear storage key {}: {}", key, e);
            }
        }
        self.api_client.clear_token();
        self.update_state(|state| *state = SessionState::default());

        tracing::info!("Logged out");
    }

    /// Restore a persisted session on startup, if one exists.
    pub fn hydrate(&self) {
        let raw = match self.storage.get(AUTH_SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!("Failed to read persisted session: {}", e);
                return;
            }
        };

        match serde_json::from_str::<SessionSnapshot>(&raw) {
            Ok(snapshot) => {
                self.api_client.set_token(&snapshot.token);
                self.update_state(|state| {
                    state.user = Some(snapshot.user);
                    state.is_authenticated = true;
                });
            }
            Err(e) => {
                tracing::warn!("Discarding unreadable session snapshot: {}", e);
                let _ = self.storage.remove(AUTH_SESSION_KEY);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;
    use crate::core::storage::MemoryStorage;
    use crate::features::auth::dtos::LoginResponse;
    use crate::features::auth::models::Role;
    use crate::features::settings::clients::SettingsApi;
    use crate::features::settings::models::UserSettings;
    use async_trait::async_trait;
    use uuid::Uuid;

    struct FakeAuthApi {
        fail_login: bool,
    }

    #[async_trait]
    impl AuthApi for FakeAuthApi {
        async fn login(&self, _credentials: &LoginRequest) -> Result<LoginResponse> {
            if self.fail_login {
                return Err(AppError::Unauthorized("bad credentials".to_string()));
            }
            Ok(LoginResponse {
                token: "token-123".to_string(),
            })
        }

        async fn me(&self) -> Result<User> {
            Ok(User {
                id: Uuid::new_v4(),
                email: "gs@polymtl.example".to_string(),
                name: Some("Placement Officer".to_string()),
                role: Role::PlacementOfficer,
            })
        }
    }

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

    fn build_store(fail_login: bool) -> (SessionStore, Arc<MemoryStorage>, Arc<ApiClient>) {
        let storage = Arc::new(MemoryStorage::new());
        let api_client = Arc::new(
            ApiClient::new(&ApiConfig {
                base_url: "http://localhost:8080/api".to_string(),
                timeout_secs: 5,
                user_agent: "test".to_string(),
            })
            .unwrap(),
        );
        let settings = Arc::new(SettingsStore::new(
            Arc::new(FakeSettingsApi),
            storage.clone(),
        ));
        let store = SessionStore::new(
            Arc::new(FakeAuthApi { fail_login }),
            api_client.clone(),
            storage.clone(),
            settings,
        );
        (store, storage, api_client)
    }

    fn credentials() -> LoginRequest {
        LoginRequest {
            email: "gs@polymtl.example".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success_persists_token_and_loads_settings() {
        let (store, storage, api_client) = build_store(false);

        let user = store.login(&credentials()).await.unwrap();

        assert_eq!(user.role, Role::PlacementOfficer);
        assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("token-123"));
        assert!(storage.get(AUTH_SESSION_KEY).unwrap().is_some());
        assert_eq!(api_client.token().as_deref(), Some("token-123"));
        // Dependent settings load wrote the lang key
        assert_eq!(storage.get("lang").unwrap().as_deref(), Some("fr"));

        let state = store.state();
        assert!(state.is_authenticated);
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_login_failure_records_status_and_leaves_session_untouched() {
        let (store, storage, api_client) = build_store(true);

        let err = store.login(&credentials()).await.unwrap_err();
        assert_eq!(err.status_code(), Some(401));

        let state = store.state();
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
        assert_eq!(state.error.as_ref().unwrap().status, Some(401));
        assert!(!state.loading);

        // Token and user untouched
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(api_client.token(), None);
    }

    #[tokio::test]
    async fn test_login_validation_rejected_before_network() {
        let (store, _storage, _api_client) = build_store(false);

        let err = store
            .login(&LoginRequest {
                email: "not-an-email".to_string(),
                password: String::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_logout_clears_storage_and_state() {
        let (store, storage, api_client) = build_store(false);
        store.login(&credentials()).await.unwrap();

        store.logout();

        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(storage.get(AUTH_SESSION_KEY).unwrap(), None);
        assert_eq!(api_client.token(), None);
        let state = store.state();
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
    }

    #[tokio::test]
    async fn test_hydrate_restores_persisted_session() {
        let (store, storage, _api_client) = build_store(false);
        store.login(&credentials()).await.unwrap();
        let snapshot = storage.get(AUTH_SESSION_KEY).unwrap().unwrap();
        drop(store);

        // Fresh store, same snapshot contents
        let (fresh, fresh_storage, fresh_client) = build_store(false);
        fresh_storage.put(AUTH_SESSION_KEY, &snapshot).unwrap();
        fresh.hydrate();

        assert!(fresh.is_authenticated());
        assert_eq!(fresh_client.token().as_deref(), Some("token-123"));
    }
}
