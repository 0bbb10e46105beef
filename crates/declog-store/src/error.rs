use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("core error: {0}")]
    Core(#[from] declog_core::CoreError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("decision not found: {0}")]
    NotFound(String),

    #[error("invalid decision: {}", .0.join("; "))]
    Invalid(Vec<String>),

    #[error("lock file conflict: {0}")]
    LockConflict(String),

    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    #[error("journal not found (searched upward from {0})")]
    JournalNotFound(String),

    #[error("journal already exists at {0}")]
    JournalExists(String),
}
