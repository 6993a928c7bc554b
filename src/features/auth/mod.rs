//! Auth session feature.
//!
//! Holds the current user identity, the bearer token and the authenticated
//! flag; the host application's route guard reads `is_authenticated` from
//! here. Login triggers the dependent settings load.

pub mod clients;
pub mod dtos;
pub mod models;
pub mod stores;

pub use clients::{AuthApi, AuthClient};
pub use stores::SessionStore;
