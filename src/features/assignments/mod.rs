//! Professor-assignment feature.
//!
//! Placement staff assign each student to a supervising professor and can
//! move an existing assignment to another professor. Local state is patched
//! from the server-confirmed assignment, never speculatively.

pub mod clients;
pub mod dtos;
pub mod models;
pub mod stores;

pub use clients::{AssignmentApi, AssignmentClient};
pub use stores::AssignmentStore;
