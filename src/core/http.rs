use std::sync::RwLock;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::config::ApiConfig;
use crate::core::error::{AppError, Result};

/// Shared HTTP client for the REST API.
///
/// Owns the base URL and the bearer token slot. The session store writes the
/// token after login and clears it on logout; every authenticated request
/// picks it up from here.
pub struct ApiClient {
    base_url: String,
    http_client: reqwest::Client,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            http_client,
            token: RwLock::new(None),
        })
    }

    pub fn set_token(&self, token: &str) {
        *self.token.write().expect("token lock poisoned") = Some(token.to_string());
    }

    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.authorize(self.http_client.get(self.url(path)));
        Self::handle_response(request.send().await?).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let request = self.authorize(self.http_client.post(self.url(path)).json(body));
        Self::handle_response(request.send().await?).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let request = self.authorize(self.http_client.put(self.url(path)).json(body));
        Self::handle_response(request.send().await?).await
    }

    /// DELETE with no response body expected.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let request = self.authorize(self.http_client.delete(self.url(path)));
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        Err(Self::status_error(status, response).await)
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let parsed = response.json::<T>().await.map_err(|e| {
                tracing::error!("Failed to parse API response: {}", e);
                AppError::Http(e)
            })?;
            return Ok(parsed);
        }

        Err(Self::status_error(status, response).await)
    }

    async fn status_error(status: reqwest::StatusCode, response: reqwest::Response) -> AppError {
        let body = response.text().await.unwrap_or_default();
        tracing::error!("API error: HTTP {} - {}", status, body);

        match status.as_u16() {
            401 => AppError::Unauthorized(body),
            404 => AppError::NotFound(body),
            code => AppError::Status {
                status: code,
                message: body,
            },
        }
    }
}
