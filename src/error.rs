use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Failed to serialize transactions: {0}")]
    Serialization(#[from] serde_json::Error),
}
