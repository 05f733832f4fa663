//! Error handling - RFC 7807 compliant responses.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use quill_core::ports::{AuthError, MediaError, RenderError};
use quill_core::{DomainError, FieldError};
use quill_shared::{ErrorResponse, FieldDetail};
use std::fmt;

use crate::observability::current_request_id;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Internal(String),
    Validation(Vec<FieldError>),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {msg}"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {msg}"),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal error: {msg}"),
            AppError::Validation(errors) => write!(f, "Validation failed: {} field(s)", errors.len()),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Unauthorized(detail) => ErrorResponse::unauthorized().with_detail(detail),
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal error");
                ErrorResponse::internal_error()
            }
            AppError::Validation(errors) => ErrorResponse::new(400, "Validation Failed")
                .with_detail("One or more fields are invalid")
                .with_errors(
                    errors
                        .iter()
                        .map(|e| FieldDetail {
                            field: e.field.clone(),
                            message: e.message.clone(),
                        })
                        .collect(),
                ),
        };
        let error = match current_request_id() {
            Some(id) => error.with_request_id(id),
            None => error,
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(missing) => AppError::NotFound(missing.to_string()),
            err @ DomainError::DuplicateEmail(_) => AppError::BadRequest(err.to_string()),
            DomainError::ValidationFailed(errors) => AppError::Validation(errors),
            DomainError::Unauthorized => AppError::Unauthorized("Unauthorized access".into()),
            DomainError::StorageUnavailable(msg) | DomainError::Render(msg) => {
                AppError::Internal(msg)
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials
            | AuthError::TokenExpired
            | AuthError::InvalidToken(_)
            | AuthError::MissingAuth => AppError::Unauthorized(err.to_string()),
            AuthError::HashingError(_) | AuthError::Provider(_) => AppError::Internal(err.to_string()),
        }
    }
}

impl From<MediaError> for AppError {
    fn from(err: MediaError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<actix_multipart::MultipartError> for AppError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        AppError::Validation(vec![FieldError::new("body", err.to_string())])
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Turns unreadable JSON bodies into the same 400 shape as field validation.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let field = match &err {
        JsonPayloadError::ContentType => "content-type",
        _ => "body",
    };
    AppError::Validation(vec![FieldError::new(field, err.to_string())]).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
