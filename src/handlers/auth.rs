use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::middleware::CurrentSession;
use crate::session::SessionUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    pub username: String,
    pub profile_url: String,
}

/// POST /auth/session - establish a session for a player.
///
/// This is the seam the external identity provider calls once its own login
/// flow (OAuth) has verified the player; the returned session identifier is
/// what gated routes expect as a bearer token.
pub async fn session_create(
    State(state): State<AppState>,
    Json(request): Json<SessionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.username.trim().is_empty() {
        return Err(ApiError::bad_request("username is required"));
    }

    let user = SessionUser {
        username: request.username,
        profile_url: request.profile_url,
        signed_in_at: Utc::now(),
    };
    let session_id = state.sessions.issue(user.clone()).await;
    tracing::info!("Session established for {}", user.username);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Session established",
            "sessionId": session_id,
            "user": user,
        })),
    ))
}

/// GET /auth/whoami - the session record attached to this request
pub async fn session_whoami(
    Extension(session): Extension<CurrentSession>,
) -> Result<impl IntoResponse, ApiError> {
    Ok((StatusCode::OK, Json(session.user)))
}

/// DELETE /auth/session - revoke the current session
pub async fn session_logout(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.sessions.revoke(session.id).await {
        return Err(ApiError::not_found("Session not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}
