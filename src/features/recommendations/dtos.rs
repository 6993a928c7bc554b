use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::features::recommendations::models::PriorityCode;

/// Request body for the recommendation upsert (create-or-update) endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertRecommendationDto {
    pub student_id: Uuid,
    pub offer_id: Uuid,
    pub priority_code: PriorityCode,
}

/// One row of the batch recommendation editor: a candidate offer plus what
/// the user did with it.
#[derive(Debug, Clone)]
pub struct RecommendationRow {
    pub offer_id: Uuid,
    pub offer_title: String,
    pub checked: bool,
    pub priority: Option<PriorityCode>,
    /// Server id of an already recorded recommendation for this offer.
    pub existing_id: Option<Uuid>,
}

/// What a submitted batch actually committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub upserted: usize,
    pub deleted: usize,
}
