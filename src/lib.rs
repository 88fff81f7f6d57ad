use crate::config::RosterConfig;
use crate::database::Database;
use anyhow::Result;
use axum::{Router, http::StatusCode};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod client;
pub mod config;
pub mod cors;
pub mod database;
pub mod domain;
pub mod error;
pub mod features;
pub mod models;
pub mod telemetry;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub database: Arc<dyn Database>,
    pub config: Arc<RosterConfig>,
}

/// Compose the full application: the `/user` resource, a bare 404 for every
/// other path, request tracing and the CORS header on every response.
pub fn build_app(state: AppState) -> Result<Router> {
    let cors = cors::allow_origin_layer(&state.config.allowed_origin)?;

    let app = Router::new()
        .nest("/user", features::user::user_router())
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Ok(app)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
