// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::schema::Violation;
use crate::store::StoreError;

/// HTTP API error with the status codes the resource controllers map to:
/// malformed identifier or bad input -> 400, validation failure -> 400 with
/// the violation list, missing session -> 401, no matching document -> 404,
/// anything unexpected from the store -> 500.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Validation(Vec<Violation>),
    Unauthorized,
    NotFound(String),
    Internal { message: String, detail: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    /// Unexpected failure: the generic message goes to the client alongside
    /// the underlying error text (a diagnostic convenience, accepted here).
    pub fn internal(message: impl Into<String>, error: impl std::fmt::Display) -> Self {
        let message = message.into();
        let detail = error.to_string();
        tracing::error!("{}: {}", message, detail);
        ApiError::Internal { message, detail }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ApiError::BadRequest(message) => json!({ "message": message }),
            ApiError::Validation(errors) => json!({
                "message": "Validation failed",
                "errors": errors,
            }),
            ApiError::Unauthorized => json!({ "message": "Unauthorized" }),
            ApiError::NotFound(message) => json!({ "message": message }),
            ApiError::Internal { message, detail } => json!({
                "message": message,
                "error": detail,
            }),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::internal("An unexpected error occurred", err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Validation(errors) => write!(f, "Validation failed ({} errors)", errors.len()),
            other => write!(
                f,
                "{}",
                other.to_json()["message"].as_str().unwrap_or("error")
            ),
        }
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
