//! Store error types

use thiserror::Error;

/// Failures raised by a raw storage backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("Storage operation failed: {0}")]
    Failed(String),
}

pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// Failures surfaced by the store. Apart from construction these never
/// propagate as `Err`; they travel opaquely inside an error report.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Malformed record: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("No storage backend could be resolved: {0}")]
    NoBackend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::Backend(BackendError::Failed("disk full".to_string()));
        assert_eq!(err.to_string(), "Backend error: Storage operation failed: disk full");

        let err = StoreError::NoBackend("no data directory".to_string());
        assert!(err.to_string().contains("no data directory"));
    }
}
