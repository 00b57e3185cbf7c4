use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

/// The server-side session record the auth gate inspects. Establishing one is
/// out of band (the identity provider calls the session endpoint after its
/// own login flow); the gate itself only checks presence.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub username: String,
    pub profile_url: String,
    pub signed_in_at: DateTime<Utc>,
}

/// In-memory session registry shared across requests. No refresh, expiry, or
/// revocation logic beyond explicit logout.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionUser>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn issue(&self, user: SessionUser) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, user);
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<SessionUser> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Returns true when a session was actually revoked.
    pub async fn revoke(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }
}
