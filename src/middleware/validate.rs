use axum::{
    body::{to_bytes, Body},
    extract::Request,
    middleware::Next,
    response::Response,
};
use serde_json::Value;

use crate::entities::{character, item, player, quest};
use crate::error::ApiError;
use crate::schema::Schema;

/// Write bodies are capped well above any legitimate payload size.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Body-validation middleware: buffer the payload, check it against the
/// resource's rule set, and short-circuit with the violation list before the
/// controller runs. On success the request is reassembled so the handler's
/// JSON extractor sees the same bytes.
async fn validate_body(
    schema: &'static Schema,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {}", e)))?;
    let payload: Value = serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::bad_request(format!("Request body is not valid JSON: {}", e)))?;

    schema.validate(&payload).map_err(ApiError::Validation)?;

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

pub async fn validate_player(request: Request, next: Next) -> Result<Response, ApiError> {
    validate_body(player::rules(), request, next).await
}

pub async fn validate_character(request: Request, next: Next) -> Result<Response, ApiError> {
    validate_body(character::rules(), request, next).await
}

pub async fn validate_quest(request: Request, next: Next) -> Result<Response, ApiError> {
    validate_body(quest::rules(), request, next).await
}

pub async fn validate_item(request: Request, next: Next) -> Result<Response, ApiError> {
    validate_body(item::rules(), request, next).await
}
