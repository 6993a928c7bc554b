use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::config::Config;
use crate::core::http::ApiClient;
use crate::core::storage::{JsonFileStorage, KeyValueStorage};
use crate::features::assignments::{AssignmentClient, AssignmentStore};
use crate::features::auth::{AuthClient, SessionStore};
use crate::features::employers::{ApplicationClient, ConvocationClient, EmployerStore};
use crate::features::layout::ViewportObserver;
use crate::features::offers::{OfferClient, OfferStore};
use crate::features::recommendations::{RecommendationClient, RecommendationStore};
use crate::features::settings::{SettingsClient, SettingsStore};

/// Initialize tracing for host applications. RUST_LOG controls the filter,
/// defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Composition root: one fully wired set of stores over a shared API client
/// and durable storage. Host applications build one of these at startup and
/// hand the stores to their views.
pub struct AppContext {
    pub session: Arc<SessionStore>,
    pub settings: Arc<SettingsStore>,
    pub assignments: Arc<AssignmentStore>,
    pub offers: Arc<OfferStore>,
    pub recommendations: Arc<RecommendationStore>,
    pub employer: Arc<EmployerStore>,
    pub viewport: Arc<ViewportObserver>,
}

impl AppContext {
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
        tracing::info!("Configuration loaded successfully");

        let storage: Arc<dyn KeyValueStorage> =
            Arc::new(JsonFileStorage::open(&config.storage.path)?);

        Self::build(&config, storage)
    }

    pub fn build(config: &Config, storage: Arc<dyn KeyValueStorage>) -> anyhow::Result<Self> {
        let api_client = Arc::new(ApiClient::new(&config.api)?);
        tracing::info!("API client initialized for {}", config.api.base_url);

        let settings = Arc::new(SettingsStore::new(
            Arc::new(SettingsClient::new(Arc::clone(&api_client))),
            Arc::clone(&storage),
        ));

        let session = Arc::new(SessionStore::new(
            Arc::new(AuthClient::new(Arc::clone(&api_client))),
            Arc::clone(&api_client),
            Arc::clone(&storage),
            Arc::clone(&settings),
        ));

        let assignments = Arc::new(AssignmentStore::new(
            Arc::new(AssignmentClient::new(Arc::clone(&api_client))),
            Arc::clone(&storage),
        ));

        let offers = Arc::new(OfferStore::new(Arc::new(OfferClient::new(Arc::clone(
            &api_client,
        )))));

        let recommendations = Arc::new(RecommendationStore::new(Arc::new(
            RecommendationClient::new(Arc::clone(&api_client)),
        )));

        let employer = Arc::new(EmployerStore::new(
            Arc::new(ApplicationClient::new(Arc::clone(&api_client))),
            Arc::new(ConvocationClient::new(Arc::clone(&api_client))),
        ));

        let viewport = Arc::new(ViewportObserver::with_default_threshold());

        tracing::info!("Stores initialized");

        Ok(Self {
            session,
            settings,
            assignments,
            offers,
            recommendations,
            employer,
            viewport,
        })
    }

    /// Restore persisted session and dashboard snapshots on startup.
    pub async fn hydrate(&self) {
        self.session.hydrate();
        self.assignments.hydrate().await;
    }
}
