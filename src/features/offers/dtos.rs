use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::validation::{PROGRAMME_CODE_REGEX, SESSION_REGEX};

/// Request body for posting a new offer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfferDto {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    #[validate(regex(
        path = *PROGRAMME_CODE_REGEX,
        message = "Programme code must be lowercase alphanumeric with hyphens"
    ))]
    pub targeted_programme: String,

    #[validate(regex(path = *SESSION_REGEX, message = "Unknown session"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
}
