use axum::response::Response;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::response::success;

pub mod admin;
pub mod events;
pub mod notifications;
pub mod registrations;
pub mod users;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "campus-events-api",
    };

    success(payload, "Health check successful")
}

/// Optional `?today=YYYY-MM-DD` override for date-relative views.
#[derive(Debug, Default, Deserialize)]
pub struct AsOfQuery {
    pub today: Option<NaiveDate>,
}

impl AsOfQuery {
    pub fn resolve(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}
