use axum::extract::{Path, Query, State};
use axum::response::Response;
use serde::Serialize;

use super::AsOfQuery;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

#[derive(Serialize)]
struct MarkedRead {
    updated: usize,
}

pub async fn current_user(State(state): State<AppState>) -> Result<Response, AppError> {
    let store = state.store.read().await;
    let user = store.user(&state.current_user_id)?.clone();
    Ok(success(user, "Current user retrieved"))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let store = state.store.read().await;
    let user = store.user(&id)?.clone();
    Ok(success(user, "User retrieved"))
}

pub async fn user_registrations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let rows = state.store.read().await.user_registrations(&id)?;
    Ok(success(rows, "Registrations retrieved"))
}

pub async fn user_tickets(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(as_of): Query<AsOfQuery>,
) -> Result<Response, AppError> {
    let tickets = state
        .store
        .read()
        .await
        .user_tickets(&id, as_of.resolve())?;
    Ok(success(tickets, "Tickets retrieved"))
}

pub async fn user_notifications(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let notifications = state.store.read().await.user_notifications(&id);
    success(notifications, "Notifications retrieved")
}

pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let updated = state.store.write().await.mark_all_notifications_read(&id);
    success(MarkedRead { updated }, "All notifications marked as read")
}

pub async fn saved_events(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let events = state.store.read().await.saved_events(&id)?;
    Ok(success(events, "Saved events retrieved"))
}

pub async fn toggle_saved_event(
    State(state): State<AppState>,
    Path((user_id, event_id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let user = state
        .store
        .write()
        .await
        .toggle_saved_event(&user_id, &event_id)?;
    Ok(success(user, "Saved events updated"))
}
