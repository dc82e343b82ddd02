//! Response types and error handling for API endpoints
//!
//! Provides unified error handling and the response envelope: every body
//! carries a human-readable `message`, successful reads add the payload
//! under a kind-named key, and failures add a machine-readable `error`
//! code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use content_common::AppError;
use content_core::DomainError;
use content_service::ServiceError;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::error;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Route not found")]
    RouteNotFound,

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Domain(e) => {
                if e.is_not_found() {
                    StatusCode::NOT_FOUND
                } else if e.is_validation() {
                    StatusCode::BAD_REQUEST
                } else if e.is_conflict() {
                    StatusCode::CONFLICT
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
            Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code().to_string();

        // Server errors go to the log in full; their bodies stay generic.
        let message = if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
            match status {
                StatusCode::BAD_GATEWAY => "Upstream service error".to_string(),
                StatusCode::SERVICE_UNAVAILABLE => "Service temporarily unavailable".to_string(),
                _ => "Internal server error".to_string(),
            }
        } else {
            self.to_string()
        };

        let body = ErrorBody {
            message,
            error: code,
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Build a success envelope with a payload under a kind-named key.
pub fn envelope<T: Serialize>(
    message: impl Into<String>,
    key: &str,
    payload: &T,
) -> ApiResult<Json<Value>> {
    let payload = serde_json::to_value(payload).map_err(ApiError::internal)?;
    let mut body = Map::new();
    body.insert("message".to_string(), Value::String(message.into()));
    body.insert(key.to_string(), payload);
    Ok(Json(Value::Object(body)))
}

/// Build a success envelope with only a message.
#[must_use]
pub fn message_only(message: impl Into<String>) -> Json<Value> {
    let mut body = Map::new();
    body.insert("message".to_string(), Value::String(message.into()));
    Json(Value::Object(body))
}

/// Format "`<subject>` `<rest>`" with the subject's first letter
/// capitalized, for response messages built from display names.
#[must_use]
pub fn sentence(subject: &str, rest: &str) -> String {
    let mut chars = subject.chars();
    match chars.next() {
        Some(first) => format!("{}{} {rest}", first.to_uppercase(), chars.as_str()),
        None => rest.to_string(),
    }
}

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}

/// No content response (204)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
