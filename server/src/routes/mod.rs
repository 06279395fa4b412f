use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer, Config};
use crate::handlers::{admin, events, health_check, notifications, registrations, users};
use crate::state::AppState;

pub fn create_routes(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/events", get(events::list_events).post(events::create_event))
        .route("/events/categories", get(events::category_summary))
        .route("/events/calendar", get(events::event_calendar))
        .route(
            "/events/:id",
            get(events::get_event)
                .patch(events::update_event)
                .delete(events::delete_event),
        )
        .route(
            "/events/:id/registrations",
            post(events::register_for_event),
        )
        .route("/registrations", get(registrations::list_participants))
        .route("/registrations/:id/status", patch(registrations::update_status))
        .route(
            "/registrations/:id/feedback",
            post(registrations::submit_feedback),
        )
        .route("/notifications/:id/read", post(notifications::mark_read))
        .route("/users/me", get(users::current_user))
        .route("/users/:id", get(users::get_user))
        .route("/users/:id/registrations", get(users::user_registrations))
        .route("/users/:id/tickets", get(users::user_tickets))
        .route("/users/:id/notifications", get(users::user_notifications))
        .route(
            "/users/:id/notifications/read-all",
            post(users::mark_all_notifications_read),
        )
        .route("/users/:id/saved-events", get(users::saved_events))
        .route(
            "/users/:id/saved-events/:event_id",
            post(users::toggle_saved_event),
        )
        .route("/admin/stats", get(admin::dashboard_stats))
        .route("/admin/events", get(admin::list_events))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer(config.production))
        .layer(create_cors_layer(config.cors_allowed_origins.as_deref()))
}
