use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recommendation ranking tier.
///
/// The wire format is SCREAMING case; the legacy BLUE/GREEN codes still
/// present on old rows deserialize into their equivalent tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityCode {
    #[serde(alias = "GREEN")]
    Bronze,
    #[serde(alias = "BLUE")]
    Silver,
    Gold,
}

impl PriorityCode {
    /// Ranking weight, higher is stronger. The server caps each student at
    /// one GOLD entry; the client surfaces the resulting error but never
    /// pre-validates the cap.
    pub fn rank(&self) -> u8 {
        match self {
            PriorityCode::Bronze => 1,
            PriorityCode::Silver => 2,
            PriorityCode::Gold => 3,
        }
    }
}

impl std::fmt::Display for PriorityCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityCode::Bronze => write!(f, "BRONZE"),
            PriorityCode::Silver => write!(f, "SILVER"),
            PriorityCode::Gold => write!(f, "GOLD"),
        }
    }
}

/// Offer recommendation for a student. `offer_title` is denormalized by the
/// server for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: Uuid,
    pub student_id: Uuid,
    pub offer_id: Uuid,
    #[serde(rename = "priorityCode")]
    pub priority: PriorityCode,
    pub offer_title: String,
}
