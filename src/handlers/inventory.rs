use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::entities::Item;
use crate::error::ApiError;
use crate::state::AppState;
use crate::store::{DocId, Filter};

/// GET /inventory - list all items
pub async fn get_all_items(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let items = state
        .store
        .items()
        .find_all()
        .await
        .map_err(|e| ApiError::internal("Error fetching items", e))?;
    Ok((StatusCode::OK, Json(items)))
}

/// GET /inventory/:id - fetch one item
pub async fn get_item_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: DocId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid item ID format"))?;
    let item = state
        .store
        .items()
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal("Error fetching item", e))?
        .ok_or_else(|| ApiError::not_found("Item not found"))?;
    Ok((StatusCode::OK, Json(item)))
}

/// GET /inventory/character/:characterId - a character's items. A character
/// with nothing in their pack is an empty list, not a 404.
pub async fn get_items_by_character(
    State(state): State<AppState>,
    Path(character_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let items = state
        .store
        .items()
        .find(Filter::new().eq("characterId", character_id))
        .await
        .map_err(|e| ApiError::internal("Error fetching items by character ID", e))?;
    Ok((StatusCode::OK, Json(items)))
}

/// POST /inventory - create an item; quantity is clamped to at least one
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<Item>,
) -> Result<impl IntoResponse, ApiError> {
    let item = payload.normalized();
    let created = state
        .store
        .items()
        .insert(&item)
        .await
        .map_err(|e| ApiError::internal("Error creating item", e))?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Item created successfully",
            "item": created,
        })),
    ))
}

/// PUT /inventory/:id - full-document replace, with the same quantity clamp
/// as create
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Item>,
) -> Result<impl IntoResponse, ApiError> {
    let id: DocId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid item ID format"))?;
    let item = payload.normalized();
    let updated = state
        .store
        .items()
        .replace(id, &item)
        .await
        .map_err(|e| ApiError::internal("Error updating item", e))?
        .ok_or_else(|| ApiError::not_found("Item not found"))?;
    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Item updated successfully",
            "item": updated,
        })),
    ))
}

/// DELETE /inventory/:id
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: DocId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid item ID format"))?;
    let removed = state
        .store
        .items()
        .delete(id)
        .await
        .map_err(|e| ApiError::internal("Error deleting item", e))?;
    if !removed {
        return Err(ApiError::not_found("Item not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}
