use std::sync::Arc;

use chrono::Datelike;
use tokio::sync::RwLock;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result, StoreError};
use crate::features::employers::clients::{ApplicationApi, ConvocationApi};
use crate::features::employers::dtos::ScheduleConvocationDto;
use crate::features::employers::models::{
    Application, ApplicationStatus, Convocation, PostInterviewStatus,
};

#[derive(Debug, Clone, Default)]
pub struct EmployerState {
    pub applications: Vec<Application>,
    pub loading: bool,
    pub error: Option<StoreError>,
}

/// Store for the employer dashboard: the applications received against the
/// employer's offers and the post-interview workflow on top of them.
///
/// Filtering and sorting are pure helpers over the in-memory list; the
/// server is only hit for loads and status changes.
pub struct EmployerStore {
    applications_api: Arc<dyn ApplicationApi>,
    convocations_api: Arc<dyn ConvocationApi>,
    state: RwLock<EmployerState>,
}

impl EmployerStore {
    pub fn new(
        applications_api: Arc<dyn ApplicationApi>,
        convocations_api: Arc<dyn ConvocationApi>,
    ) -> Self {
        Self {
            applications_api,
            convocations_api,
            state: RwLock::new(EmployerState::default()),
        }
    }

    pub async fn state(&self) -> EmployerState {
        self.state.read().await.clone()
    }

    /// Fetch applications for an employer. Read action: errors recorded, not
    /// rethrown.
    pub async fn load(&self, employer_email: &str) -> Result<()> {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        match self.applications_api.list_for_employer(employer_email).await {
            Ok(applications) => {
                let mut state = self.state.write().await;
                state.applications = applications;
                state.loading = false;
            }
            Err(e) => {
                tracing::warn!("Failed to load applications: {}", e);
                let mut state = self.state.write().await;
                state.error = Some(StoreError::from(&e));
                state.loading = false;
            }
        }

        Ok(())
    }

    /// Applications with the given review status, newest first.
    pub async fn with_status(&self, status: ApplicationStatus) -> Vec<Application> {
        let mut matching: Vec<Application> = self
            .state
            .read()
            .await
            .applications
            .iter()
            .filter(|a| a.status == status)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching
    }

    /// Applications for a given session (case-insensitive); applications
    /// without a session are excluded.
    pub async fn for_session(&self, session: &str) -> Vec<Application> {
        self.state
            .read()
            .await
            .applications
            .iter()
            .filter(|a| {
                a.session
                    .as_deref()
                    .is_some_and(|s| s.eq_ignore_ascii_case(session))
            })
            .cloned()
            .collect()
    }

    /// Applications created in the given calendar year.
    pub async fn for_year(&self, year: i32) -> Vec<Application> {
        self.state
            .read()
            .await
            .applications
            .iter()
            .filter(|a| a.created_at.year() == year)
            .cloned()
            .collect()
    }

    /// Accept or reject an application; the returned entity replaces the
    /// local row.
    pub async fn set_status(
        &self,
        application_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Application> {
        self.begin_write().await;

        match self.applications_api.set_status(application_id, status).await {
            Ok(updated) => {
                let mut state = self.state.write().await;
                if let Some(application) = state
                    .applications
                    .iter_mut()
                    .find(|a| a.id == application_id)
                {
                    *application = updated.clone();
                }
                state.loading = false;
                Ok(updated)
            }
            Err(e) => {
                self.fail_write(&e).await;
                Err(e)
            }
        }
    }

    /// Schedule a post-interview convocation; on success the matching
    /// application is marked `ConvocationSent`.
    pub async fn schedule_convocation(
        &self,
        dto: &ScheduleConvocationDto,
    ) -> Result<Convocation> {
        if let Err(e) = dto.validate() {
            let e = AppError::Validation(e.to_string());
            self.state.write().await.error = Some(StoreError::from(&e));
            return Err(e);
        }

        self.begin_write().await;

        match self.convocations_api.schedule(dto).await {
            Ok(convocation) => {
                let mut state = self.state.write().await;
                if let Some(application) = state
                    .applications
                    .iter_mut()
                    .find(|a| a.id == dto.application_id)
                {
                    application.post_interview = Some(PostInterviewStatus::ConvocationSent);
                }
                state.loading = false;
                Ok(convocation)
            }
            Err(e) => {
                self.fail_write(&e).await;
                Err(e)
            }
        }
    }

    async fn begin_write(&self) {
        let mut state = self.state.write().await;
        state.loading = true;
        state.error = None;
    }

    async fn fail_write(&self, e: &AppError) {
        let mut state = self.state.write().await;
        state.error = Some(StoreError::from(e));
        state.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{Duration, Utc};

    struct FakeApplicationApi {
        applications: Vec<Application>,
    }

    #[async_trait]
    impl ApplicationApi for FakeApplicationApi {
        async fn list_for_employer(&self, _employer_email: &str) -> Result<Vec<Application>> {
            Ok(self.applications.clone())
        }

        async fn set_status(
            &self,
            application_id: Uuid,
            status: ApplicationStatus,
        ) -> Result<Application> {
            let mut updated = self
                .applications
                .iter()
                .find(|a| a.id == application_id)
                .cloned()
                .ok_or_else(|| AppError::NotFound("application".to_string()))?;
            updated.status = status;
            Ok(updated)
        }
    }

    struct FakeConvocationApi;

    #[async_trait]
    impl ConvocationApi for FakeConvocationApi {
        async fn schedule(&self, dto: &ScheduleConvocationDto) -> Result<Convocation> {
            Ok(Convocation {
                id: Uuid::new_v4(),
                application_id: dto.application_id,
                scheduled_at: dto.scheduled_at,
                location: dto.location.clone(),
            })
        }
    }

    fn application(status: ApplicationStatus, session: Option<&str>, age_days: i64) -> Application {
        Application {
            id: Uuid::new_v4(),
            status,
            post_interview: None,
            student_email: "student@polymtl.example".to_string(),
            employer_email: "rh@acme.example".to_string(),
            created_at: Utc::now() - Duration::days(age_days),
            session: session.map(String::from),
        }
    }

    fn build_store(applications: Vec<Application>) -> EmployerStore {
        EmployerStore::new(
            Arc::new(FakeApplicationApi { applications }),
            Arc::new(FakeConvocationApi),
        )
    }

    #[tokio::test]
    async fn test_with_status_filters_and_sorts_newest_first() {
        let store = build_store(vec![
            application(ApplicationStatus::Pending, None, 10),
            application(ApplicationStatus::Accepted, None, 5),
            application(ApplicationStatus::Pending, None, 1),
        ]);
        store.load("rh@acme.example").await.unwrap();

        let pending = store.with_status(ApplicationStatus::Pending).await;

        assert_eq!(pending.len(), 2);
        assert!(pending[0].created_at > pending[1].created_at);
    }

    #[tokio::test]
    async fn test_for_session_is_case_insensitive() {
        let store = build_store(vec![
            application(ApplicationStatus::Pending, Some("HIVER"), 1),
            application(ApplicationStatus::Pending, Some("ete"), 1),
            application(ApplicationStatus::Pending, None, 1),
        ]);
        store.load("rh@acme.example").await.unwrap();

        assert_eq!(store.for_session("hiver").await.len(), 1);
        assert_eq!(store.for_session("ETE").await.len(), 1);
    }

    #[tokio::test]
    async fn test_set_status_patches_only_target() {
        let applications = vec![
            application(ApplicationStatus::Pending, None, 1),
            application(ApplicationStatus::Pending, None, 2),
        ];
        let target = applications[0].id;
        let other = applications[1].id;
        let store = build_store(applications);
        store.load("rh@acme.example").await.unwrap();

        store
            .set_status(target, ApplicationStatus::Accepted)
            .await
            .unwrap();

        let state = store.state().await;
        let accepted = state.applications.iter().find(|a| a.id == target).unwrap();
        let untouched = state.applications.iter().find(|a| a.id == other).unwrap();
        assert_eq!(accepted.status, ApplicationStatus::Accepted);
        assert_eq!(untouched.status, ApplicationStatus::Pending);
    }

    #[tokio::test]
    async fn test_schedule_convocation_marks_post_interview() {
        let applications = vec![application(ApplicationStatus::Accepted, None, 1)];
        let target = applications[0].id;
        let store = build_store(applications);
        store.load("rh@acme.example").await.unwrap();

        store
            .schedule_convocation(&ScheduleConvocationDto {
                application_id: target,
                scheduled_at: Utc::now() + Duration::days(7),
                location: "Pavillon principal, local A-540".to_string(),
            })
            .await
            .unwrap();

        let state = store.state().await;
        assert_eq!(
            state.applications[0].post_interview,
            Some(PostInterviewStatus::ConvocationSent)
        );
    }

    #[tokio::test]
    async fn test_schedule_convocation_requires_location() {
        let applications = vec![application(ApplicationStatus::Accepted, None, 1)];
        let target = applications[0].id;
        let store = build_store(applications);
        store.load("rh@acme.example").await.unwrap();

        let err = store
            .schedule_convocation(&ScheduleConvocationDto {
                application_id: target,
                scheduled_at: Utc::now(),
                location: String::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.state().await.applications[0].post_interview, None);
    }
}
