use std::time::Duration;

use thiserror::Error;

/// Failures talking to the download-info or job-management service.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("service unreachable: {0}")]
    Unreachable(String),

    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("service rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference store is corrupt: {0}")]
    Corrupt(String),

    #[error("preference store unavailable: {0}")]
    Unavailable(String),
}
