use std::env;
use std::net::SocketAddr;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3001";
const DEFAULT_CURRENT_USER_ID: &str = "user1";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    /// Start from the bundled campus fixtures instead of an empty store.
    pub seed_fixtures: bool,
    /// User returned by `/users/me`. There is no authentication.
    pub current_user_id: String,
    pub production: bool,
    pub cors_allowed_origins: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            seed_fixtures: true,
            current_user_id: DEFAULT_CURRENT_USER_ID.to_string(),
            production: false,
            cors_allowed_origins: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            listen_addr: env::var("LISTEN_ADDR")
                .ok()
                .map(|raw| parse_listen_addr(&raw))
                .unwrap_or_else(default_listen_addr),
            seed_fixtures: env::var("SEED_FIXTURES")
                .map(|raw| parse_flag(&raw, true))
                .unwrap_or(true),
            current_user_id: env::var("CURRENT_USER_ID")
                .unwrap_or_else(|_| DEFAULT_CURRENT_USER_ID.to_string()),
            production: env::var("RUST_ENV")
                .map(|v| v.to_lowercase() == "production")
                .unwrap_or(false),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS").ok(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3001))
}

fn parse_listen_addr(raw: &str) -> SocketAddr {
    match raw.trim().parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::warn!(
                "Config: invalid LISTEN_ADDR '{}': {}, using {}",
                raw,
                e,
                DEFAULT_LISTEN_ADDR
            );
            default_listen_addr()
        }
    }
}

fn parse_flag(raw: &str, default: bool) -> bool {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        other => {
            tracing::warn!("Config: unrecognized flag value '{}', using {}", other, default);
            default
        }
    }
}
