//! Typed API error for HTTP handlers.
//!
//! The single translation point from service failures to wire responses.
//! Every error renders as `{"timestamp", "message", "status"}`.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use employee_registry_core::UNEXPECTED_ERROR_MESSAGE;
use employee_registry_service::{FailureKind, ServiceError};

use crate::response_types::ErrorResponse;

/// Use via `Result<T, ApiError>` in handlers.
///
/// Unclassified failures log the real error server-side and return a fixed
/// message to the client.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request rejected before reaching the service.
    BadRequest(String),
    Service(ServiceError),
}

impl ApiError {
    fn kind(&self) -> FailureKind {
        match self {
            Self::BadRequest(_) => FailureKind::BusinessRule,
            Self::Service(err) => err.kind(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.kind() {
            FailureKind::NotFound => StatusCode::NOT_FOUND,
            FailureKind::InvalidEmail | FailureKind::BusinessRule => StatusCode::BAD_REQUEST,
            FailureKind::Unclassified => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match self {
            Self::Service(err) if status == StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!(error = ?err, "internal server error");
                UNEXPECTED_ERROR_MESSAGE.to_owned()
            },
            Self::Service(err) => err.to_string(),
            Self::BadRequest(msg) => msg,
        };
        let body = ErrorResponse { timestamp: Utc::now(), message, status: status.as_u16() };
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
