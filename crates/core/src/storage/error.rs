use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// `NotFound` is an expected, recoverable outcome; the remaining variants
/// are infrastructure failures surfaced by the active backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("whisky not found: {id}")]
    NotFound { id: String },
    #[error("whisky already exists: {id}")]
    AlreadyExists { id: String },
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
