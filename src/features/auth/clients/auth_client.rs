use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::auth::clients::AuthApi;
use crate::features::auth::dtos::{LoginRequest, LoginResponse};
use crate::features::auth::models::User;

/// HTTP client for the auth endpoints.
pub struct AuthClient {
    api: Arc<ApiClient>,
}

impl AuthClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse> {
        tracing::debug!("Logging in: {}", credentials.email);
        self.api.post("/auth/login", credentials).await
    }

    async fn me(&self) -> Result<User> {
        self.api.get("/me").await
    }
}
