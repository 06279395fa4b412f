use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use crate::models::{EventFilter, EventPatch, NewEvent};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: i32,
    pub month: u32,
}

pub async fn list_events(
    State(state): State<AppState>,
    Query(filter): Query<EventFilter>,
) -> Response {
    let events = state.store.read().await.list_events(&filter);
    success(events, "Events retrieved")
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let store = state.store.read().await;
    let event = store
        .event(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Event with id '{}' was not found", id)))?;

    Ok(success(event, "Event retrieved"))
}

pub async fn create_event(
    State(state): State<AppState>,
    Json(data): Json<NewEvent>,
) -> Result<Response, AppError> {
    let blank = data.blank_fields();
    if !blank.is_empty() {
        return Err(AppError::ValidationError(format!(
            "Missing required fields: {}",
            blank.join(", ")
        )));
    }

    let event = state.store.write().await.create_event(data);
    Ok(created(event, "Event created"))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<EventPatch>,
) -> Result<Response, AppError> {
    let event = state.store.write().await.update_event(&id, patch)?;
    Ok(success(event, "Event updated"))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let event = state.store.write().await.delete_event(&id)?;
    Ok(success(event, "Event deleted"))
}

pub async fn register_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(request): Json<RegisterRequest>,
) -> Response {
    let registration = state
        .store
        .write()
        .await
        .register_for_event(&event_id, &request.user_id);
    created(registration, "Registration submitted")
}

pub async fn category_summary(State(state): State<AppState>) -> Response {
    let summary = state.store.read().await.category_summary();
    success(summary, "Categories retrieved")
}

pub async fn event_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Response, AppError> {
    if !(1..=12).contains(&query.month) {
        return Err(AppError::ValidationError(format!(
            "Month must be between 1 and 12, got {}",
            query.month
        )));
    }

    let calendar = state
        .store
        .read()
        .await
        .event_calendar(query.year, query.month);
    Ok(success(calendar, "Calendar retrieved"))
}
