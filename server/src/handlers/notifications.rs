use axum::extract::{Path, State};
use axum::response::Response;

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::empty_success;

pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    state.store.write().await.mark_notification_read(&id)?;
    Ok(empty_success("Notification marked as read"))
}
