//! HTTP error mapping for the API.
//!
//! Translates core store errors into plain-text HTTP responses:
//! validation failures become 400 with the first validation message,
//! unresolvable ids become 404, everything else is a generic 500.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use replog_core::Error as CoreError;

/// Terminal HTTP error carried out of a handler
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Generic 500 for failures that should not leak details
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal Server Error".into(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(message) => Self {
                status: StatusCode::BAD_REQUEST,
                message,
            },
            CoreError::UserNotFound(_) => Self {
                status: StatusCode::NOT_FOUND,
                message: "not found".into(),
            },
            other => {
                tracing::error!("Store operation failed: {}", other);
                Self::internal()
            }
        }
    }
}

impl From<actix_web::error::BlockingError> for ApiError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        tracing::error!("Blocking store call failed: {}", err);
        Self::internal()
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status)
            .content_type("text/plain; charset=utf-8")
            .body(self.message.clone())
    }
}

/// Convenience alias for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;
