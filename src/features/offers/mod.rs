//! Internship-offer feature.
//!
//! Employers post offers; placement staff read the list and filter it down
//! to recommendation candidates for the upcoming winter term.

pub mod candidates;
pub mod clients;
pub mod dtos;
pub mod models;
pub mod stores;

pub use clients::{OfferApi, OfferClient};
pub use stores::OfferStore;
