pub mod assignment_client;

pub use assignment_client::AssignmentClient;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::assignments::models::{AssignmentReceipt, Professor, Student};

/// Service contract for the student/professor/assignment endpoints.
#[async_trait]
pub trait AssignmentApi: Send + Sync {
    async fn list_students(&self) -> Result<Vec<Student>>;
    async fn list_professors(&self) -> Result<Vec<Professor>>;
    async fn create_assignment(
        &self,
        student_id: Uuid,
        professor_id: Uuid,
    ) -> Result<AssignmentReceipt>;
    async fn update_assignment(
        &self,
        assignment_id: Uuid,
        professor_id: Uuid,
    ) -> Result<AssignmentReceipt>;
    async fn resend_notification(&self, student_id: Uuid) -> Result<()>;
}
