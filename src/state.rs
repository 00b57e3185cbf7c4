use crate::session::SessionStore;
use crate::store::Store;

/// Shared application state. The store backend is injected at startup so
/// tests can run against the in-memory implementation.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            sessions: SessionStore::new(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Store::in_memory())
    }
}
