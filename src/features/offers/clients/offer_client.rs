use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::offers::clients::OfferApi;
use crate::features::offers::dtos::CreateOfferDto;
use crate::features::offers::models::Offer;

/// HTTP client for the offer endpoints.
pub struct OfferClient {
    api: Arc<ApiClient>,
}

impl OfferClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OfferApi for OfferClient {
    async fn list_offers(&self) -> Result<Vec<Offer>> {
        self.api.get("/offers").await
    }

    async fn create_offer(&self, dto: &CreateOfferDto) -> Result<Offer> {
        tracing::debug!("Posting offer: {}", dto.title);
        self.api.post("/offers", dto).await
    }
}
