use std::sync::Arc;

use chrono::{Datelike, Utc};
use tokio::sync::RwLock;
use validator::Validate;

use crate::core::error::{AppError, Result, StoreError};
use crate::features::offers::candidates::winter_candidates;
use crate::features::offers::clients::OfferApi;
use crate::features::offers::dtos::CreateOfferDto;
use crate::features::offers::models::Offer;

#[derive(Debug, Clone, Default)]
pub struct OfferState {
    pub offers: Vec<Offer>,
    pub loading: bool,
    pub error: Option<StoreError>,
}

/// Store for the offer list.
///
/// Employers append to it by posting offers; placement staff read it to build
/// recommendation candidates. Other stores read it only through
/// [`OfferStore::recommendation_candidates`].
pub struct OfferStore {
    api: Arc<dyn OfferApi>,
    state: RwLock<OfferState>,
}

impl OfferStore {
    pub fn new(api: Arc<dyn OfferApi>) -> Self {
        Self {
            api,
            state: RwLock::new(OfferState::default()),
        }
    }

    pub async fn state(&self) -> OfferState {
        self.state.read().await.clone()
    }

    /// Fetch the offer list. Read action: errors recorded, not rethrown.
    pub async fn load(&self) -> Result<()> {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        match self.api.list_offers().await {
            Ok(offers) => {
                let mut state = self.state.write().await;
                state.offers = offers;
                state.loading = false;
            }
            Err(e) => {
                tracing::warn!("Failed to load offers: {}", e);
                let mut state = self.state.write().await;
                state.error = Some(StoreError::from(&e));
                state.loading = false;
            }
        }

        Ok(())
    }

    /// Post a new offer; the returned entity is appended locally.
    pub async fn create(&self, dto: &CreateOfferDto) -> Result<Offer> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        match self.api.create_offer(dto).await {
            Ok(offer) => {
                let mut state = self.state.write().await;
                state.offers.push(offer.clone());
                state.loading = false;
                Ok(offer)
            }
            Err(e) => {
                let mut state = self.state.write().await;
                state.error = Some(StoreError::from(&e));
                state.loading = false;
                Err(e)
            }
        }
    }

    /// Offers eligible as recommendation candidates for the upcoming winter
    /// term, relative to the current calendar year.
    pub async fn recommendation_candidates(&self) -> Vec<Offer> {
        let offers = self.state.read().await.offers.clone();
        winter_candidates(&offers, Utc::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_offer;
    use async_trait::async_trait;
    use uuid::Uuid;

    struct FakeOfferApi {
        offers: Vec<Offer>,
    }

    #[async_trait]
    impl OfferApi for FakeOfferApi {
        async fn list_offers(&self) -> Result<Vec<Offer>> {
            Ok(self.offers.clone())
        }

        async fn create_offer(&self, dto: &CreateOfferDto) -> Result<Offer> {
            Ok(Offer {
                id: Uuid::new_v4(),
                title: dto.title.clone(),
                targeted_programme: dto.targeted_programme.clone(),
                session: dto.session.clone(),
                start_date: dto.start_date,
            })
        }
    }

    #[tokio::test]
    async fn test_create_appends_returned_offer() {
        let store = OfferStore::new(Arc::new(FakeOfferApi { offers: vec![] }));

        let offer = store
            .create(&CreateOfferDto {
                title: "Stagiaire QA".to_string(),
                targeted_programme: "informatique".to_string(),
                session: Some("hiver".to_string()),
                start_date: None,
            })
            .await
            .unwrap();

        let state = store.state().await;
        assert_eq!(state.offers, vec![offer]);
    }

    #[tokio::test]
    async fn test_create_invalid_dto_rejected_before_network() {
        let store = OfferStore::new(Arc::new(FakeOfferApi { offers: vec![] }));

        let err = store
            .create(&CreateOfferDto {
                title: String::new(),
                targeted_programme: "informatique".to_string(),
                session: None,
                start_date: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(store.state().await.offers.is_empty());
    }

    #[tokio::test]
    async fn test_recommendation_candidates_filters_loaded_offers() {
        let next_year = Utc::now().year() + 1;
        let store = OfferStore::new(Arc::new(FakeOfferApi {
            offers: vec![
                sample_offer(Some("hiver"), Some(next_year)),
                sample_offer(Some("ete"), Some(next_year)),
                sample_offer(None, None),
            ],
        }));
        store.load().await.unwrap();

        let candidates = store.recommendation_candidates().await;
        assert_eq!(candidates.len(), 2);
    }
}
