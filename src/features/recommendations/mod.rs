//! Offer-recommendation feature.
//!
//! Placement staff recommend winter-term offers to students with a ranking
//! tier. Edits are submitted as a sequential batch of upserts and deletes;
//! the server enforces the one-GOLD-per-student cap.

pub mod clients;
pub mod dtos;
pub mod models;
pub mod stores;

pub use clients::{RecommendationApi, RecommendationClient};
pub use stores::RecommendationStore;
