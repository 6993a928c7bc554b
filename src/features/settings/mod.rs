pub mod clients;
pub mod models;
pub mod stores;

pub use clients::{SettingsApi, SettingsClient};
pub use stores::SettingsStore;
