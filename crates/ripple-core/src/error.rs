//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business rule failures raised by the post aggregate.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("no post found with id {id}")]
    PostNotFound { id: Uuid },

    #[error("no comment found with id {id}")]
    CommentNotFound { id: Uuid },

    #[error("validation failed on field '{field}': {message}")]
    Validation { field: &'static str, message: String },

    #[error("user already liked this post")]
    AlreadyLiked,

    #[error("user has not liked this post")]
    NotLiked,

    #[error("requester is not the author of this post")]
    NotAuthorized,

    #[error("document store failure: {0}")]
    Store(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("store connection failed: {0}")]
    Connection(String),

    #[error("store operation failed: {0}")]
    Query(String),

    #[error("document not found")]
    NotFound,
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        DomainError::Store(err.to_string())
    }
}
