use axum::Router;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use campus_events_server::config::Config;
use campus_events_server::routes::create_routes;
use campus_events_server::{AppState, Store};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env();

    let store = if config.seed_fixtures {
        let store = Store::seeded().expect("Failed to parse seed fixtures");
        tracing::info!(
            events = store.events().len(),
            users = store.users().len(),
            "Store seeded from fixtures"
        );
        store
    } else {
        tracing::info!("Starting with an empty store");
        Store::new()
    };

    let state = AppState::new(store.into_shared(), config.current_user_id.clone());
    let app: Router = create_routes(state, &config);

    tracing::info!("🚀 Server running at http://{}", config.listen_addr);

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
