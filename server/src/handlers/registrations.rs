use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use crate::models::StatusChange;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

#[derive(Debug, Default, Deserialize)]
pub struct ParticipantQuery {
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: StatusChange,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub rating: i32,
    pub comment: String,
}

/// Admin participant table: every registration with its event.
pub async fn list_participants(
    State(state): State<AppState>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Response, AppError> {
    let rows = state
        .store
        .read()
        .await
        .participants(query.search.as_deref())?;
    Ok(success(rows, "Participants retrieved"))
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<StatusRequest>,
) -> Result<Response, AppError> {
    let registration = state
        .store
        .write()
        .await
        .update_registration_status(&id, request.status)?;
    Ok(success(registration, "Registration status updated"))
}

pub async fn submit_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Response, AppError> {
    let registration = state
        .store
        .write()
        .await
        .submit_feedback(&id, request.rating, request.comment)?;
    Ok(success(registration, "Feedback submitted"))
}
