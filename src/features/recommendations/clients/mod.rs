pub mod recommendation_client;

pub use recommendation_client::RecommendationClient;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::recommendations::dtos::UpsertRecommendationDto;
use crate::features::recommendations::models::Recommendation;

/// Service contract for the recommendation endpoints.
#[async_trait]
pub trait RecommendationApi: Send + Sync {
    async fn list_for_student(&self, student_id: Uuid) -> Result<Vec<Recommendation>>;
    async fn upsert(&self, dto: &UpsertRecommendationDto) -> Result<Recommendation>;
    async fn delete(&self, recommendation_id: Uuid) -> Result<()>;
}
