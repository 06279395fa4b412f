use crate::store::SharedStore;

/// Shared handler state. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub current_user_id: String,
}

impl AppState {
    pub fn new(store: SharedStore, current_user_id: impl Into<String>) -> Self {
        Self {
            store,
            current_user_id: current_user_id.into(),
        }
    }
}
