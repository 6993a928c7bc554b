pub mod recommendation_store;

pub use recommendation_store::{RecommendationState, RecommendationStore};
