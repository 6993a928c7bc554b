use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Student row on the placement dashboard, mirrored from the server.
///
/// `professor_id` and `assignment_id` are patched locally from the
/// server-confirmed assignment after an assign/reassign call; the list is not
/// refetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub program: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professor_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<Uuid>,
    #[serde(default)]
    pub notification_failed: bool,
}

/// Supervising professor. Read-only on the client; only `available == true`
/// entries are offered as assignment choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
    pub id: Uuid,
    pub name: String,
    pub department: String,
    pub available: bool,
    #[serde(default)]
    pub assigned_students_count: u32,
}

/// Link between a student and a supervising professor.
///
/// A student has at most one active assignment; reassignment replaces the
/// professor on the existing assignment, never appends a second one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub professor_id: Uuid,
}

/// Server response to an assign call: the created assignment plus whether the
/// student notification went out. A saved assignment with a failed
/// notification is a partial success the dashboard surfaces separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentReceipt {
    pub assignment: Assignment,
    #[serde(default = "default_true")]
    pub notification_sent: bool,
}

fn default_true() -> bool {
    true
}
