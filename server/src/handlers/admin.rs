use axum::extract::{Query, State};
use axum::response::Response;
use serde::Deserialize;

use super::AsOfQuery;
use crate::state::AppState;
use crate::utils::response::success;

#[derive(Debug, Default, Deserialize)]
pub struct AdminEventQuery {
    pub search: Option<String>,
}

pub async fn dashboard_stats(
    State(state): State<AppState>,
    Query(as_of): Query<AsOfQuery>,
) -> Response {
    let stats = state.store.read().await.dashboard_stats(as_of.resolve());
    success(stats, "Dashboard statistics retrieved")
}

/// Manage-events table, searchable by title, category or department.
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<AdminEventQuery>,
) -> Response {
    let events = state
        .store
        .read()
        .await
        .admin_events(query.search.as_deref());
    success(events, "Events retrieved")
}
