pub mod offer_client;

pub use offer_client::OfferClient;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::offers::dtos::CreateOfferDto;
use crate::features::offers::models::Offer;

/// Service contract for the offer endpoints.
#[async_trait]
pub trait OfferApi: Send + Sync {
    async fn list_offers(&self) -> Result<Vec<Offer>>;
    async fn create_offer(&self, dto: &CreateOfferDto) -> Result<Offer>;
}
