use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::employers::clients::ConvocationApi;
use crate::features::employers::dtos::ScheduleConvocationDto;
use crate::features::employers::models::Convocation;

/// HTTP client for the convocation endpoints.
pub struct ConvocationClient {
    api: Arc<ApiClient>,
}

impl ConvocationClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ConvocationApi for ConvocationClient {
    async fn schedule(&self, dto: &ScheduleConvocationDto) -> Result<Convocation> {
        tracing::debug!(
            "Scheduling convocation for application {}",
            dto.application_id
        );
        self.api.post("/convocations", dto).await
    }
}
