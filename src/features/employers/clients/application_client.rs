use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::employers::clients::ApplicationApi;
use crate::features::employers::dtos::SetStatusDto;
use crate::features::employers::models::{Application, ApplicationStatus};

/// HTTP client for the application endpoints.
pub struct ApplicationClient {
    api: Arc<ApiClient>,
}

impl ApplicationClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ApplicationApi for ApplicationClient {
    async fn list_for_employer(&self, employer_email: &str) -> Result<Vec<Application>> {
        self.api
            .get(&format!(
                "/applications?employer={}",
                urlencoding::encode(employer_email)
            ))
            .await
    }

    async fn set_status(
        &self,
        application_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Application> {
        tracing::debug!("Setting application {} status", application_id);
        self.api
            .put(
                &format!("/applications/{}/status", application_id),
                &SetStatusDto { status },
            )
            .await
    }
}
