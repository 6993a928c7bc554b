use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Portal role, drives which dashboard the host application routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Employer,
    /// Internship-placement staff ("GS" in the portal UI).
    #[serde(rename = "GS")]
    PlacementOfficer,
    ProgramManager,
}

/// Authenticated portal user, mirrored from `GET /me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: Role,
}
