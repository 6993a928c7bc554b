pub mod auth_client;

pub use auth_client::AuthClient;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::auth::dtos::{LoginRequest, LoginResponse};
use crate::features::auth::models::User;

/// Service contract for the auth endpoints.
///
/// Stores depend on this trait rather than the HTTP client so tests can
/// inject in-memory fakes.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse>;
    async fn me(&self) -> Result<User>;
}
