use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::entities::Player;
use crate::error::ApiError;
use crate::state::AppState;
use crate::store::DocId;

/// GET /player - list all players
pub async fn get_all_players(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let players = state
        .store
        .players()
        .find_all()
        .await
        .map_err(|e| ApiError::internal("Error fetching players", e))?;
    Ok((StatusCode::OK, Json(players)))
}

/// GET /player/:id - fetch one player
pub async fn get_player_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: DocId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid player ID format"))?;
    let player = state
        .store
        .players()
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal("Error fetching player", e))?
        .ok_or_else(|| ApiError::not_found("Player not found"))?;
    Ok((StatusCode::OK, Json(player)))
}

/// POST /player - create a player. Creating one directly is the identity
/// provider's fallback path; `createdAt` is assigned by the store.
pub async fn create_player(
    State(state): State<AppState>,
    Json(payload): Json<Player>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state
        .store
        .players()
        .insert(&payload)
        .await
        .map_err(|e| ApiError::internal("Error creating player", e))?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Player created successfully",
            "player": created,
        })),
    ))
}

/// PUT /player/:id - full-document replace. The original creation timestamp
/// survives the replace; the body does not carry it.
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Player>,
) -> Result<impl IntoResponse, ApiError> {
    let id: DocId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid player ID format"))?;
    let updated = state
        .store
        .players()
        .replace(id, &payload)
        .await
        .map_err(|e| ApiError::internal("Error updating player", e))?
        .ok_or_else(|| ApiError::not_found("Player not found"))?;
    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Player updated successfully",
            "player": updated,
        })),
    ))
}

/// DELETE /player/:id - remove a player. Characters owned by the player are
/// not cascaded.
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: DocId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid player ID format"))?;
    let removed = state
        .store
        .players()
        .delete(id)
        .await
        .map_err(|e| ApiError::internal("Error deleting player", e))?;
    if !removed {
        return Err(ApiError::not_found("Player not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}
