use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::features::assignments::models::Student;

/// Request body for creating an assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentDto {
    pub student_id: Uuid,
    pub professor_id: Uuid,
}

/// Request body for moving an existing assignment to another professor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReassignDto {
    pub professor_id: Uuid,
}

/// Snapshot persisted under the `assignment-storage` key so the dashboard can
/// render the last known list before the first fetch completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSnapshot {
    pub students: Vec<Student>,
}
