use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::state::AppState;

/// GET / - service description
pub async fn root() -> impl IntoResponse {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Questlog API",
        "version": version,
        "description": "REST API for tabletop RPG campaign management",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "auth": "/auth/session, /auth/whoami",
            "players": "/player[/:id]",
            "characters": "/character[/:id], /character/user/:id",
            "quests": "/quest[/:id], /quest/difficulty/:d, /quest/type/:t, /quest/available/:level",
            "inventory": "/inventory[/:id], /inventory/character/:characterId",
        },
    }))
}

/// GET /health - liveness plus a store ping
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "store": "ok",
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "store_error": e.to_string(),
            })),
        ),
    }
}
