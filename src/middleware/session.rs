use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::session::SessionUser;
use crate::state::AppState;

/// Session context injected into gated requests.
#[derive(Clone, Debug)]
pub struct CurrentSession {
    pub id: Uuid,
    pub user: SessionUser,
}

/// Auth gate: a request either carries an established session or it does not.
/// On a missing or unknown session the gate short-circuits with a fixed 401
/// body and no further processing; otherwise it injects the session context
/// and passes control unchanged down the chain.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_session_token(request.headers()).ok_or(ApiError::Unauthorized)?;
    let id = Uuid::parse_str(&token).map_err(|_| ApiError::Unauthorized)?;
    let user = state.sessions.get(id).await.ok_or(ApiError::Unauthorized)?;

    request.extensions_mut().insert(CurrentSession { id, user });
    Ok(next.run(request).await)
}

/// Extract the session identifier from the Authorization header.
fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let auth_header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))?;
    let auth_str = auth_header.to_str().ok()?;
    let token = auth_str.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
