pub mod application_client;
pub mod convocation_client;

pub use application_client::ApplicationClient;
pub use convocation_client::ConvocationClient;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::employers::dtos::ScheduleConvocationDto;
use crate::features::employers::models::{Application, ApplicationStatus, Convocation};

/// Service contract for the application endpoints.
#[async_trait]
pub trait ApplicationApi: Send + Sync {
    async fn list_for_employer(&self, employer_email: &str) -> Result<Vec<Application>>;
    async fn set_status(
        &self,
        application_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Application>;
}

/// Service contract for the convocation endpoints.
#[async_trait]
pub trait ConvocationApi: Send + Sync {
    async fn schedule(&self, dto: &ScheduleConvocationDto) -> Result<Convocation>;
}
