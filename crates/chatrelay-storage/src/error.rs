use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("archive bucket is not configured")]
    NotConfigured,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("S3 PutObject error: {0}")]
    PutObject(String),
}
