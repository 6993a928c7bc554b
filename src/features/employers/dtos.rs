use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::features::employers::models::ApplicationStatus;

/// Request body for updating an application's review status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStatusDto {
    pub status: ApplicationStatus,
}

/// Request body for scheduling a post-interview convocation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConvocationDto {
    pub application_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    #[validate(length(min = 1, max = 200, message = "Location is required"))]
    pub location: String,
}
