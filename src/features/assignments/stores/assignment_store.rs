use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result, StoreError};
use crate::core::storage::KeyValueStorage;
use crate::features::assignments::clients::AssignmentApi;
use crate::features::assignments::dtos::AssignmentSnapshot;
use crate::features::assignments::models::{AssignmentReceipt, Professor, Student};
use crate::shared::constants::ASSIGNMENT_STORAGE_KEY;

#[derive(Debug, Clone, Default)]
pub struct AssignmentState {
    pub students: Vec<Student>,
    pub professors: Vec<Professor>,
    pub loading: bool,
    pub error: Option<StoreError>,
}

/// Store for the professor-assignment dashboard.
///
/// Mirrors the student and professor lists from the server and patches the
/// affected student in place from the server-confirmed assignment after each
/// write. The student list is persisted under `assignment-storage` so the
/// dashboard can render the last known state before the first fetch.
pub struct AssignmentStore {
    api: Arc<dyn AssignmentApi>,
    storage: Arc<dyn KeyValueStorage>,
    state: RwLock<AssignmentState>,
}

impl AssignmentStore {
    pub fn new(api: Arc<dyn AssignmentApi>, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            api,
            storage,
            state: RwLock::new(AssignmentState::default()),
        }
    }

    pub async fn state(&self) -> AssignmentState {
        self.state.read().await.clone()
    }

    /// Professors offered as assignment choices.
    pub async fn available_professors(&self) -> Vec<Professor> {
        self.state
            .read()
            .await
            .professors
            .iter()
            .filter(|p| p.available)
            .cloned()
            .collect()
    }

    /// Restore the persisted student list on startup, if present.
    pub async fn hydrate(&self) {
        let raw = match self.storage.get(ASSIGNMENT_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!("Failed to read assignment snapshot: {}", e);
                return;
            }
        };

        match serde_json::from_str::<AssignmentSnapshot>(&raw) {
            Ok(snapshot) => {
                self.state.write().await.students = snapshot.students;
            }
            Err(e) => {
                tracing::warn!("Discarding unreadable assignment snapshot: {}", e);
                let _ = self.storage.remove(ASSIGNMENT_STORAGE_KEY);
            }
        }
    }

    /// Fetch students and professors. Read action: errors are recorded in
    /// state, not rethrown.
    pub async fn load(&self) -> Result<()> {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let loaded = async {
            let students = self.api.list_students().await?;
            let professors = self.api.list_professors().await?;
            Ok::<_, AppError>((students, professors))
        }
        .await;

        match loaded {
            Ok((students, professors)) => {
                self.persist_snapshot(&students);
                let mut state = self.state.write().await;
                state.students = students;
                state.professors = professors;
                state.loading = false;
            }
            Err(e) => {
                tracing::warn!("Failed to load assignment dashboard: {}", e);
                let mut state = self.state.write().await;
                state.error = Some(StoreError::from(&e));
                state.loading = false;
            }
        }

        Ok(())
    }

    /// Assign a student to a professor.
    ///
    /// Fails with a validation error before any network call when no
    /// professor was selected. On success, patches only the matching
    /// student's `professor_id` and `assignment_id` from the returned
    /// assignment. A saved assignment whose notification did not go out is
    /// surfaced as a distinct [`AppError::NotificationDelivery`] so the view
    /// can offer the retry action; the local patch is still applied.
    pub async fn assign(
        &self,
        student_id: Uuid,
        professor_id: Option<Uuid>,
    ) -> Result<AssignmentReceipt> {
        let professor_id = match professor_id {
            Some(id) => id,
            None => {
                let e = AppError::Validation("A professor must be selected".to_string());
                self.record_error(&e).await;
                return Err(e);
            }
        };

        self.begin_write().await;

        match self.api.create_assignment(student_id, professor_id).await {
            Ok(receipt) => {
                {
                    let mut state = self.state.write().await;
                    if let Some(student) =
                        state.students.iter_mut().find(|s| s.id == student_id)
                    {
                        student.professor_id = Some(receipt.assignment.professor_id);
                        student.assignment_id = Some(receipt.assignment.id);
                        student.notification_failed = !receipt.notification_sent;
                    }
                    state.loading = false;
                }
                self.persist_current_snapshot().await;

                if !receipt.notification_sent {
                    let e = AppError::NotificationDelivery(format!(
                        "Assignment saved but the notification to student {} was not delivered",
                        student_id
                    ));
                    self.record_error(&e).await;
                    return Err(e);
                }

                Ok(receipt)
            }
            Err(e) => {
                self.fail_write(&e).await;
                Err(e)
            }
        }
    }

    /// Move an existing assignment to another professor.
    ///
    /// The caller only has the assignment id, so the student is located by
    /// matching `assignment_id` and only `professor_id` is patched. When no
    /// local student matches (stale list), the store falls back to a full
    /// reload instead of silently skipping the patch.
    pub async fn reassign(&self, assignment_id: Uuid, professor_id: Uuid) -> Result<()> {
        self.begin_write().await;

        match self.api.update_assignment(assignment_id, professor_id).await {
            Ok(receipt) => {
                let patched = {
                    let mut state = self.state.write().await;
                    let found = state
                        .students
                        .iter_mut()
                        .find(|s| s.assignment_id == Some(assignment_id));
                    match found {
                        Some(student) => {
                            student.professor_id = Some(receipt.assignment.professor_id);
                            true
                        }
                        None => false,
                    }
                };

                if patched {
                    {
                        self.state.write().await.loading = false;
                    }
                    self.persist_current_snapshot().await;
                } else {
                    tracing::warn!(
                        "No local student with assignment {}; reloading list",
                        assignment_id
                    );
                    self.load().await?;
                }

                Ok(())
            }
            Err(e) => {
                self.fail_write(&e).await;
                Err(e)
            }
        }
    }

    /// User-triggered retry of a failed student notification.
    pub async fn retry_notification(&self, student_id: Uuid) -> Result<()> {
        self.begin_write().await;

        match self.api.resend_notification(student_id).await {
            Ok(()) => {
                {
                    let mut state = self.state.write().await;
                    if let Some(student) =
                        state.students.iter_mut().find(|s| s.id == student_id)
                    {
                        student.notification_failed = false;
                    }
                    state.loading = false;
                }
                self.persist_current_snapshot().await;
                Ok(())
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

    async fn record_error(&self, e: &AppError) {
        self.state.write().await.error = Some(StoreError::from(e));
    }

    async fn persist_current_snapshot(&self) {
        let students = self.state.read().await.students.clone();
        self.persist_snapshot(&students);
    }

    fn persist_snapshot(&self, students: &[Student]) {
        let snapshot = AssignmentSnapshot {
            students: students.to_vec(),
        };
        match serde_json::to_string(&snapshot) {
            Ok(raw) => {
                if let Err(e) = self.storage.put(ASSIGNMENT_STORAGE_KEY, &raw) {
                    tracing::warn!("Failed to persist assignment snapshot: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize assignment snapshot: {}", e),
        }
    }
}
