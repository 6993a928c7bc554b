use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{Result, StoreError};
use crate::features::offers::models::Offer;
use crate::features::recommendations::clients::RecommendationApi;
use crate::features::recommendations::dtos::{
    BatchOutcome, RecommendationRow, UpsertRecommendationDto,
};
use crate::features::recommendations::models::Recommendation;

#[derive(Debug, Clone, Default)]
pub struct RecommendationState {
    pub recommendations: Vec<Recommendation>,
    pub loading: bool,
    pub error: Option<StoreError>,
}

/// Store for a student's offer recommendations.
///
/// The batch editor shows one row per candidate offer; submitting walks the
/// rows sequentially, upserting checked rows and deleting unchecked ones that
/// were previously recorded. There is no transactional rollback: a failure
/// mid-batch leaves earlier entries committed.
pub struct RecommendationStore {
    api: Arc<dyn RecommendationApi>,
    state: RwLock<RecommendationState>,
}

impl RecommendationStore {
    pub fn new(api: Arc<dyn RecommendationApi>) -> Self {
        Self {
            api,
            state: RwLock::new(RecommendationState::default()),
        }
    }

    pub async fn state(&self) -> RecommendationState {
        self.state.read().await.clone()
    }

    /// Fetch recommendations for a student. Read action: errors recorded,
    /// not rethrown.
    pub async fn load_for_student(&self, student_id: Uuid) -> Result<()> {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        match self.api.list_for_student(student_id).await {
            Ok(recommendations) => {
                let mut state = self.state.write().await;
                state.recommendations = recommendations;
                state.loading = false;
            }
            Err(e) => {
                tracing::warn!("Failed to load recommendations: {}", e);
                let mut state = self.state.write().await;
                state.error = Some(StoreError::from(&e));
                state.loading = false;
            }
        }

        Ok(())
    }

    /// Build editor rows by joining candidate offers with the loaded
    /// recommendations (read-only cross-store input).
    pub async fn rows_for(&self, candidates: &[Offer]) -> Vec<RecommendationRow> {
        let recommendations = self.state.read().await.recommendations.clone();

        candidates
            .iter()
            .map(|offer| {
                let existing = recommendations.iter().find(|r| r.offer_id == offer.id);
                RecommendationRow {
                    offer_id: offer.id,
                    offer_title: offer.title.clone(),
                    checked: existing.is_some(),
                    priority: existing.map(|r| r.priority),
                    existing_id: existing.map(|r| r.id),
                }
            })
            .collect()
    }

    /// Submit the batch editor state, one row at a time and in row order.
    ///
    /// Checked rows with a priority are upserted; unchecked rows that were
    /// previously recorded are deleted; rows that are neither are skipped.
    /// The first failure stops the batch and is recorded and rethrown —
    /// entries committed before it stay committed.
    pub async fn submit_batch(
        &self,
        student_id: Uuid,
        rows: &[RecommendationRow],
    ) -> Result<BatchOutcome> {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let mut outcome = BatchOutcome::default();

        for row in rows {
            let result = match (row.checked, row.priority, row.existing_id) {
                (true, Some(priority), _) => {
                    let upserted = self
                        .api
                        .upsert(&UpsertRecommendationDto {
                            student_id,
                            offer_id: row.offer_id,
                            priority_code: priority,
                        })
                        .await;
                    match upserted {
                        Ok(recommendation) => {
                            self.apply_upsert(recommendation).await;
                            outcome.upserted += 1;
                            Ok(())
                        }
                        Err(e) => Err(e),
                    }
                }
                (false, _, Some(existing_id)) => match self.api.delete(existing_id).await {
                    Ok(()) => {
                        self.apply_delete(existing_id).await;
                        outcome.deleted += 1;
                        Ok(())
                    }
                    Err(e) => Err(e),
                },
                // Untouched, or checked without a priority picked yet
                _ => Ok(()),
            };

            if let Err(e) = result {
                let mut state = self.state.write().await;
                state.error = Some(StoreError::from(&e));
                state.loading = false;
                return Err(e);
            }
        }

        self.state.write().await.loading = false;
        Ok(outcome)
    }

    async fn apply_upsert(&self, recommendation: Recommendation) {
        let mut state = self.state.write().await;
        match state
            .recommendations
            .iter_mut()
            .find(|r| r.id == recommendation.id || r.offer_id == recommendation.offer_id)
        {
            Some(existing) => *existing = recommendation,
            None => state.recommendations.push(recommendation),
        }
    }

    async fn apply_delete(&self, recommendation_id: Uuid) {
        let mut state = self.state.write().await;
        state.recommendations.retain(|r| r.id != recommendation_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{AppError, ErrorKind};
    use crate::shared::test_helpers::sample_offer;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Upsert(Uuid),
        Delete(Uuid),
    }

    #[derive(Default)]
    struct FakeRecommendationApi {
        calls: Mutex<Vec<Call>>,
        fail_upserts_from: Option<usize>,
        gold_cap_hit: bool,
    }

    #[async_trait]
    impl RecommendationApi for FakeRecommendationApi {
        async fn list_for_student(&self, _student_id: Uuid) -> Result<Vec<Recommendation>> {
            Ok(vec![])
        }

        async fn upsert(&self, dto: &UpsertRecommendationDto) -> Result<Recommendation> {
            let upserts_so_far = {
                let mut calls = self.calls.lock().unwrap();
                calls.push(Call::Upsert(dto.offer_id));
                calls
                    .iter()
                    .filter(|c| matches!(c, Call::Upsert(_)))
                    .count()
            };

            if self.gold_cap_hit {
                return Err(AppError::CapacityExceeded(
                    "maximum GOLD recommendations reached".to_string(),
                ));
            }
            if let Some(limit) = self.fail_upserts_from {
                if upserts_so_far > limit {
                    return Err(AppError::Status {
                        status: 500,
                        message: "upsert failed".to_string(),
                    });
                }
            }

            Ok(Recommendation {
                id: Uuid::new_v4(),
                student_id: dto.student_id,
                offer_id: dto.offer_id,
                priority: dto.priority_code,
                offer_title: "offer".to_string(),
            })
        }

        async fn delete(&self, recommendation_id: Uuid) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Delete(recommendation_id));
            Ok(())
        }
    }

    use crate::features::recommendations::models::PriorityCode;

    #[tokio::test]
    async fn test_batch_issues_exactly_the_required_calls() {
        let api = Arc::new(FakeRecommendationApi::default());
        let store = RecommendationStore::new(api.clone());
        let student_id = Uuid::new_v4();

        let offer_a = Uuid::new_v4();
        let offer_b = Uuid::new_v4();
        let offer_c = Uuid::new_v4();
        let existing_b = Uuid::new_v4();

        let rows = vec![
            RecommendationRow {
                offer_id: offer_a,
                offer_title: "A".to_string(),
                checked: true,
                priority: Some(PriorityCode::Gold),
                existing_id: None,
            },
            RecommendationRow {
                offer_id: offer_b,
                offer_title: "B".to_string(),
                checked: false,
                priority: None,
                existing_id: Some(existing_b),
            },
            RecommendationRow {
                offer_id: offer_c,
                offer_title: "C".to_string(),
                checked: false,
                priority: None,
                existing_id: None,
            },
        ];

        let outcome = store.submit_batch(student_id, &rows).await.unwrap();

        assert_eq!(outcome, BatchOutcome { upserted: 1, deleted: 1 });
        let calls = api.calls.lock().unwrap().clone();
        assert_eq!(calls, vec![Call::Upsert(offer_a), Call::Delete(existing_b)]);
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_earlier_entries() {
        let api = Arc::new(FakeRecommendationApi {
            fail_upserts_from: Some(1),
            ..Default::default()
        });
        let store = RecommendationStore::new(api.clone());
        let student_id = Uuid::new_v4();

        let rows: Vec<RecommendationRow> = (0..3)
            .map(|i| RecommendationRow {
                offer_id: Uuid::new_v4(),
                offer_title: format!("offer {}", i),
                checked: true,
                priority: Some(PriorityCode::Silver),
                existing_id: None,
            })
            .collect();

        let err = store.submit_batch(student_id, &rows).await.unwrap_err();
        assert_eq!(err.status_code(), Some(500));

        // First upsert committed, second failed, third never attempted
        let calls = api.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 2);
        let state = store.state().await;
        assert_eq!(state.recommendations.len(), 1);
        assert_eq!(state.recommendations[0].offer_id, rows[0].offer_id);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_gold_cap_surfaces_as_capacity_exceeded() {
        let api = Arc::new(FakeRecommendationApi {
            gold_cap_hit: true,
            ..Default::default()
        });
        let store = RecommendationStore::new(api);

        let rows = vec![RecommendationRow {
            offer_id: Uuid::new_v4(),
            offer_title: "A".to_string(),
            checked: true,
            priority: Some(PriorityCode::Gold),
            existing_id: None,
        }];

        let err = store
            .submit_batch(Uuid::new_v4(), &rows)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::CapacityExceeded(_)));
        let state = store.state().await;
        assert_eq!(
            state.error.as_ref().unwrap().kind,
            ErrorKind::CapacityExceeded
        );
    }

    #[tokio::test]
    async fn test_rows_for_joins_candidates_with_existing() {
        let api = Arc::new(FakeRecommendationApi::default());
        let store = RecommendationStore::new(api);
        let offers = vec![sample_offer(Some("hiver"), None), sample_offer(None, None)];

        let student_id = Uuid::new_v4();
        let existing = Recommendation {
            id: Uuid::new_v4(),
            student_id,
            offer_id: offers[0].id,
            priority: PriorityCode::Gold,
            offer_title: offers[0].title.clone(),
        };
        store.state.write().await.recommendations = vec![existing.clone()];

        let rows = store.rows_for(&offers).await;

        assert_eq!(rows.len(), 2);
        assert!(rows[0].checked);
        assert_eq!(rows[0].priority, Some(PriorityCode::Gold));
        assert_eq!(rows[0].existing_id, Some(existing.id));
        assert!(!rows[1].checked);
        assert_eq!(rows[1].existing_id, None);
    }
}
