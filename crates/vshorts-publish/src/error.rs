//! Publish error types.

use thiserror::Error;

/// Result type for publish operations.
pub type PublishResult<T> = Result<T, PublishError>;

/// Errors from the publish half of the pipeline.
///
/// `CredentialFailure` aborts a scheduler run before any item is
/// touched; upload failures are isolated per item and leave the item
/// pending for the next run.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("credential failure: {0}")]
    CredentialFailure(String),

    #[error("upload failed: {0}")]
    UploadFailed(String),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl PublishError {
    /// Create a credential failure.
    pub fn credential(message: impl Into<String>) -> Self {
        Self::CredentialFailure(message.into())
    }

    /// Create an upload failure.
    pub fn upload_failed(message: impl Into<String>) -> Self {
        Self::UploadFailed(message.into())
    }
}
