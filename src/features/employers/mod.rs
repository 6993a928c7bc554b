//! Employer dashboard feature.
//!
//! Applications received against the employer's offers, review-status
//! updates, and scheduling of post-interview convocations.

pub mod clients;
pub mod dtos;
pub mod models;
pub mod stores;

pub use clients::{ApplicationApi, ApplicationClient, ConvocationApi, ConvocationClient};
pub use stores::EmployerStore;
