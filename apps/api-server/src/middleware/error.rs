//! Error handling middleware - maps domain and store failures to the
//! wire-level `{field: message}` error bodies.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use ripple_shared::ErrorBody;

/// Application-level error type carrying the response key and message.
#[derive(Debug)]
pub enum AppError {
    NotFound {
        key: &'static str,
        message: String,
    },
    BadRequest {
        key: &'static str,
        message: String,
    },
    Unauthorized {
        key: &'static str,
        message: String,
    },
    /// Document store failure. The caller-visible contract deliberately
    /// does not distinguish these from client mistakes: an opaque 400.
    Store,
    Internal(String),
}

impl AppError {
    pub fn not_found(key: &'static str, message: impl Into<String>) -> Self {
        AppError::NotFound {
            key,
            message: message.into(),
        }
    }

    pub fn bad_request(key: &'static str, message: impl Into<String>) -> Self {
        AppError::BadRequest {
            key,
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound { key, message } => write!(f, "not found ({key}): {message}"),
            AppError::BadRequest { key, message } => write!(f, "bad request ({key}): {message}"),
            AppError::Unauthorized { key, message } => {
                write!(f, "unauthorized ({key}): {message}")
            }
            AppError::Store => write!(f, "document store failure"),
            AppError::Internal(message) => write!(f, "internal error: {message}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Store => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound { key, message }
            | AppError::BadRequest { key, message }
            | AppError::Unauthorized { key, message } => ErrorBody::field(*key, message.clone()),
            AppError::Store => ErrorBody::field("error", "Error while fetching data"),
            AppError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                ErrorBody::field("error", "Internal server error")
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from domain errors
impl From<ripple_core::error::DomainError> for AppError {
    fn from(err: ripple_core::error::DomainError) -> Self {
        use ripple_core::error::DomainError;

        match err {
            DomainError::PostNotFound { .. } => {
                AppError::not_found("postnotfound", "No post found with that id")
            }
            DomainError::CommentNotFound { .. } => {
                AppError::not_found("commentnotexists", "Comment does not exist")
            }
            DomainError::Validation { field, message } => AppError::BadRequest {
                key: field,
                message,
            },
            DomainError::AlreadyLiked => {
                AppError::bad_request("alreadyliked", "User already liked this post")
            }
            DomainError::NotLiked => {
                AppError::bad_request("notliked", "You have not yet liked this post")
            }
            DomainError::NotAuthorized => AppError::Unauthorized {
                key: "notauth",
                message: "User not authorized to delete this post".to_string(),
            },
            DomainError::Store(message) => {
                tracing::error!("Document store error: {}", message);
                AppError::Store
            }
        }
    }
}

impl From<ripple_core::error::RepoError> for AppError {
    fn from(err: ripple_core::error::RepoError) -> Self {
        tracing::error!("Document store error: {}", err);
        AppError::Store
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
