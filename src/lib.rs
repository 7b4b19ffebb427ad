pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;

use axum::Router;
use std::sync::Arc;

// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Self {
        Self { config }
    }
}

pub fn app(config: config::Config) -> Router {
    let state = Arc::new(AppState::new(config));

    Router::new()
        .merge(routes::routes())
        .merge(routes::analyses::routes(&state))
        .with_state(state)
}
