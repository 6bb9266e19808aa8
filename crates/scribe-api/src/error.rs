//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use scribe_core::error::{AppError, ErrorKind};
use scribe_core::types::ApiResponse;

/// Handler-facing error: an [`AppError`] that renders as the response envelope.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Result type returned by every handler.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// HTTP status for each error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Unauthorized | ErrorKind::TokenInvalid => StatusCode::UNAUTHORIZED,
        ErrorKind::AlreadyExists => StatusCode::CONFLICT,
        ErrorKind::Validation | ErrorKind::AgeRestriction | ErrorKind::StoreConflict(_) => {
            StatusCode::BAD_REQUEST
        }
        ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        let body = if err.kind.is_server_error() {
            tracing::error!(kind = %err.kind, error = %err.message, source = ?err.source, "Internal server error");
            ApiResponse::<serde_json::Value>::failure("An internal error occurred.", None)
        } else {
            tracing::debug!(kind = %err.kind, error = %err.message, "Request rejected");
            ApiResponse::failure(err.message, err.details)
        };

        (status, Json(body)).into_response()
    }
}
