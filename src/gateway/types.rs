//! Gateway request types and error rendering
//!
//! Request bodies deserialize into explicit schemas with `Option` fields;
//! presence and non-emptiness are validated in the handlers before any
//! store call, so every failure renders as `{"error": <message>}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::transfer::TransferError;

/// Create-user request body (POST /api/users/)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Alice")]
    pub name: Option<String>,
    #[schema(example = "alice")]
    pub username: Option<String>,
    /// Defaults to 0 when unspecified
    #[serde(default)]
    #[schema(example = 100)]
    pub balance: i64,
}

impl CreateUserRequest {
    /// Validate presence of required fields; empty counts as missing.
    /// Username is checked before name; error messages depend on the order.
    pub fn validate(&self) -> Result<(&str, &str), ApiError> {
        let username = self
            .username
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::bad_request("No username provided!"))?;
        let name = self
            .name
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::bad_request("No name provided!"))?;
        Ok((name, username))
    }
}

/// API error with message, rendered as `{"error": <message>}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!("database error: {}", e);
        ApiError::internal(format!("Database error: {}", e))
    }
}

impl From<TransferError> for ApiError {
    fn from(e: TransferError) -> Self {
        let status = StatusCode::from_u16(e.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        ApiError::new(status, e.to_string())
    }
}
