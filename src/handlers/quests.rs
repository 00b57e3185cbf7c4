use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::entities::{quest, Quest};
use crate::error::ApiError;
use crate::state::AppState;
use crate::store::{DocId, Filter};

/// GET /quest - list all quests
pub async fn get_all_quests(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let quests = state
        .store
        .quests()
        .find_all()
        .await
        .map_err(|e| ApiError::internal("Error fetching quests", e))?;
    Ok((StatusCode::OK, Json(quests)))
}

/// GET /quest/:id - fetch one quest
pub async fn get_quest_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: DocId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid quest ID format"))?;
    let quest = state
        .store
        .quests()
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal("Error fetching quest", e))?
        .ok_or_else(|| ApiError::not_found("Quest not found"))?;
    Ok((StatusCode::OK, Json(quest)))
}

/// GET /quest/difficulty/:difficulty - quests at one difficulty tier
pub async fn get_quests_by_difficulty(
    State(state): State<AppState>,
    Path(difficulty): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if !quest::DIFFICULTIES.contains(&difficulty.as_str()) {
        return Err(ApiError::bad_request(format!(
            "Invalid difficulty. Must be one of: {}",
            quest::DIFFICULTIES.join(", ")
        )));
    }
    let quests = state
        .store
        .quests()
        .find(Filter::new().eq("difficulty", difficulty))
        .await
        .map_err(|e| ApiError::internal("Error fetching quests by difficulty", e))?;
    Ok((StatusCode::OK, Json(quests)))
}

/// GET /quest/type/:quest_type - quests of one type
pub async fn get_quests_by_type(
    State(state): State<AppState>,
    Path(quest_type): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if !quest::QUEST_TYPES.contains(&quest_type.as_str()) {
        return Err(ApiError::bad_request(format!(
            "Invalid quest type. Must be one of: {}",
            quest::QUEST_TYPES.join(", ")
        )));
    }
    let quests = state
        .store
        .quests()
        .find(Filter::new().eq("questType", quest_type))
        .await
        .map_err(|e| ApiError::internal("Error fetching quests by type", e))?;
    Ok((StatusCode::OK, Json(quests)))
}

/// GET /quest/available/:level - available quests a character of the given
/// level can start: status "available" and minimumLevel at or below the
/// character's level.
pub async fn get_available_quests_for_level(
    State(state): State<AppState>,
    Path(level): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let level: i64 = level
        .parse()
        .map_err(|_| ApiError::bad_request("Character level must be an integer"))?;
    if !(1..=20).contains(&level) {
        return Err(ApiError::bad_request(
            "Character level must be between 1 and 20",
        ));
    }
    let quests = state
        .store
        .quests()
        .find(Filter::new().eq("status", "available").lte("minimumLevel", level))
        .await
        .map_err(|e| ApiError::internal("Error fetching available quests", e))?;
    Ok((StatusCode::OK, Json(quests)))
}

/// POST /quest - create a quest with field defaults applied
pub async fn create_quest(
    State(state): State<AppState>,
    Json(payload): Json<Quest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state
        .store
        .quests()
        .insert(&payload)
        .await
        .map_err(|e| ApiError::internal("Error creating quest", e))?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Quest created successfully",
            "quest": created,
        })),
    ))
}

/// PUT /quest/:id - full-document replace
pub async fn update_quest(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Quest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: DocId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid quest ID format"))?;
    let updated = state
        .store
        .quests()
        .replace(id, &payload)
        .await
        .map_err(|e| ApiError::internal("Error updating quest", e))?
        .ok_or_else(|| ApiError::not_found("Quest not found"))?;
    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Quest updated successfully",
            "quest": updated,
        })),
    ))
}

/// DELETE /quest/:id
pub async fn delete_quest(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: DocId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid quest ID format"))?;
    let removed = state
        .store
        .quests()
        .delete(id)
        .await
        .map_err(|e| ApiError::internal("Error deleting quest", e))?;
    if !removed {
        return Err(ApiError::not_found("Quest not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}
