use serde::{Deserialize, Serialize};

/// Per-user portal settings, mirrored from the settings endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub language: String,
}
