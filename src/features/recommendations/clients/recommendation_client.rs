use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::http::ApiClient;
use crate::features::recommendations::clients::RecommendationApi;
use crate::features::recommendations::dtos::UpsertRecommendationDto;
use crate::features::recommendations::models::Recommendation;

/// HTTP client for the recommendation endpoints.
pub struct RecommendationClient {
    api: Arc<ApiClient>,
}

impl RecommendationClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl RecommendationApi for RecommendationClient {
    async fn list_for_student(&self, student_id: Uuid) -> Result<Vec<Recommendation>> {
        self.api
            .get(&format!("/students/{}/recommendations", student_id))
            .await
    }

    async fn upsert(&self, dto: &UpsertRecommendationDto) -> Result<Recommendation> {
        tracing::debug!(
            "Upserting recommendation: student={} offer={} priority={}",
            dto.student_id,
            dto.offer_id,
            dto.priority_code
        );

        // The GOLD cap is enforced server-side and comes back as a 400
        self.api
            .put("/recommendations", dto)
            .await
            .map_err(|e| match e {
                AppError::Status { status, message } if (400..500).contains(&status) => {
                    AppError::CapacityExceeded(message)
                }
                other => other,
            })
    }

    async fn delete(&self, recommendation_id: Uuid) -> Result<()> {
        self.api
            .delete(&format!("/recommendations/{}", recommendation_id))
            .await
    }
}
