use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: HTTP {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Recommendation capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("Notification delivery failed: {0}")]
    NotificationDelivery(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// HTTP status code associated with this error, when one exists.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Status { status, .. } => Some(*status),
            AppError::Unauthorized(_) => Some(401),
            AppError::NotFound(_) => Some(404),
            AppError::CapacityExceeded(_) => Some(400),
            AppError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::Http(_) => ErrorKind::Transport,
            AppError::Status { .. } => ErrorKind::Status,
            AppError::Unauthorized(_) => ErrorKind::Unauthorized,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::CapacityExceeded(_) => ErrorKind::CapacityExceeded,
            AppError::NotificationDelivery(_) => ErrorKind::NotificationDelivery,
            AppError::Storage(_) => ErrorKind::Storage,
            AppError::Serialization(_) => ErrorKind::Serialization,
        }
    }
}

/// Stable error discriminant for UI branching.
///
/// Views branch on this instead of substring-matching error messages, so
/// message wording can change without breaking behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Status,
    Unauthorized,
    NotFound,
    CapacityExceeded,
    NotificationDelivery,
    Storage,
    Serialization,
}

/// Cloneable error snapshot recorded in store state.
///
/// The original `AppError` is rethrown to the caller; the snapshot is what
/// views read back from the store's `error` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    pub kind: ErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

impl From<&AppError> for StoreError {
    fn from(err: &AppError) -> Self {
        Self {
            kind: err.kind(),
            status: err.status_code(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let err = AppError::Status {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.status_code(), Some(503));
        assert_eq!(
            AppError::Unauthorized("bad token".to_string()).status_code(),
            Some(401)
        );
        assert_eq!(
            AppError::CapacityExceeded("gold cap".to_string()).status_code(),
            Some(400)
        );
        assert_eq!(
            AppError::Validation("missing".to_string()).status_code(),
            None
        );
    }

    #[test]
    fn test_store_error_snapshot() {
        let err = AppError::NotificationDelivery("email bounced".to_string());
        let snapshot = StoreError::from(&err);
        assert_eq!(snapshot.kind, ErrorKind::NotificationDelivery);
        assert_eq!(snapshot.status, None);
        assert!(snapshot.message.contains("email bounced"));
    }
}
