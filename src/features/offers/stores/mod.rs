pub mod offer_store;

pub use offer_store::{OfferState, OfferStore};
