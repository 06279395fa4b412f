pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;

pub use state::AppState;
pub use store::{SharedStore, Store, StoreError};
