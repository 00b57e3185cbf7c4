use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::entities::Character;
use crate::error::ApiError;
use crate::state::AppState;
use crate::store::{DocId, Filter};

/// GET /character - list all characters
pub async fn get_all_characters(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let characters = state
        .store
        .characters()
        .find_all()
        .await
        .map_err(|e| ApiError::internal("Error fetching characters", e))?;
    Ok((StatusCode::OK, Json(characters)))
}

/// GET /character/:id - fetch one character
pub async fn get_character_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: DocId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid character ID format"))?;
    let character = state
        .store
        .characters()
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal("Error fetching character", e))?
        .ok_or_else(|| ApiError::not_found("Character not found"))?;
    Ok((StatusCode::OK, Json(character)))
}

/// GET /character/user/:id - characters owned by a player. An unknown or
/// characterless player is an empty list, not a 404.
pub async fn get_characters_by_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let characters = state
        .store
        .characters()
        .find(Filter::new().eq("userId", id))
        .await
        .map_err(|e| ApiError::internal("Error fetching characters by user ID", e))?;
    Ok((StatusCode::OK, Json(characters)))
}

/// POST /character - create a character with field defaults applied
pub async fn create_character(
    State(state): State<AppState>,
    Json(payload): Json<Character>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state
        .store
        .characters()
        .insert(&payload)
        .await
        .map_err(|e| ApiError::internal("Error creating character", e))?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Character created successfully",
            "character": created,
        })),
    ))
}

/// PUT /character/:char_id - full-document replace
pub async fn update_character(
    State(state): State<AppState>,
    Path(char_id): Path<String>,
    Json(payload): Json<Character>,
) -> Result<impl IntoResponse, ApiError> {
    let id: DocId = char_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid character ID format"))?;
    let updated = state
        .store
        .characters()
        .replace(id, &payload)
        .await
        .map_err(|e| ApiError::internal("Error updating character", e))?
        .ok_or_else(|| ApiError::not_found("Character not found"))?;
    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Character updated successfully",
            "character": updated,
        })),
    ))
}

/// DELETE /character/:id
pub async fn delete_character(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: DocId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid character ID format"))?;
    let removed = state
        .store
        .characters()
        .delete(id)
        .await
        .map_err(|e| ApiError::internal("Error deleting character", e))?;
    if !removed {
        return Err(ApiError::not_found("Character not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}
