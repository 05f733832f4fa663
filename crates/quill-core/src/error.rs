//! Domain-level error types.

use serde::Serialize;
use thiserror::Error;

/// Which record could not be located.
///
/// A missing post and a missing comment inside an existing post are kept apart so
/// callers can tell the two situations apart from the message alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Missing {
    Author(String),
    BlogPost(String),
    Comment { post_id: String, comment_id: String },
}

impl std::fmt::Display for Missing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Missing::Author(id) => write!(f, "Author with id {id} not found"),
            Missing::BlogPost(id) => write!(f, "Blog post with id {id} not found"),
            Missing::Comment {
                post_id,
                comment_id,
            } => write!(
                f,
                "Comment with id {comment_id} not found in blog post {post_id}"
            ),
        }
    }
}

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(Missing),

    #[error("Email {0} is already registered")]
    DuplicateEmail(String),

    #[error("Validation failed")]
    ValidationFailed(Vec<FieldError>),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Export failed: {0}")]
    Render(String),
}

impl DomainError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::ValidationFailed(vec![FieldError::new(field, message)])
    }
}

/// Document store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Collection {0} does not exist")]
    Missing(String),

    #[error("Collection {collection} is malformed: {reason}")]
    Malformed { collection: String, reason: String },

    #[error("I/O failure: {0}")]
    Io(String),

    #[error("Collection {0} was modified by another writer")]
    VersionConflict(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::StorageUnavailable(err.to_string())
    }
}
