use mesmer_storage::store::Store;

/// Shared application state, injected into route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}
