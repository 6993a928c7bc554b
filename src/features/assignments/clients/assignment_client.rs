use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::assignments::clients::AssignmentApi;
use crate::features::assignments::dtos::{CreateAssignmentDto, ReassignDto};
use crate::features::assignments::models::{AssignmentReceipt, Professor, Student};

/// HTTP client for the student/professor/assignment endpoints.
pub struct AssignmentClient {
    api: Arc<ApiClient>,
}

impl AssignmentClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AssignmentApi for AssignmentClient {
    async fn list_students(&self) -> Result<Vec<Student>> {
        self.api.get("/students").await
    }

    async fn list_professors(&self) -> Result<Vec<Professor>> {
        self.api.get("/professors").await
    }

    async fn create_assignment(
        &self,
        student_id: Uuid,
        professor_id: Uuid,
    ) -> Result<AssignmentReceipt> {
        tracing::debug!(
            "Creating assignment: student={} professor={}",
            student_id,
            professor_id
        );

        self.api
            .post(
                "/assignments",
                &CreateAssignmentDto {
                    student_id,
                    professor_id,
                },
            )
            .await
    }

    async fn update_assignment(
        &self,
        assignment_id: Uuid,
        professor_id: Uuid,
    ) -> Result<AssignmentReceipt> {
        tracing::debug!(
            "Reassigning assignment {} to professor {}",
            assignment_id,
            professor_id
        );

        self.api
            .put(
                &format!("/assignments/{}", assignment_id),
                &ReassignDto { professor_id },
            )
            .await
    }

    async fn resend_notification(&self, student_id: Uuid) -> Result<()> {
        let _: serde_json::Value = self
            .api
            .post(
                &format!("/students/{}/notifications/resend", student_id),
                &serde_json::json!({}),
            )
            .await?;
        Ok(())
    }
}
