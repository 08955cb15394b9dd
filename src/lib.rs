//! Fresh-rs library - no-cache static file server for local development.

use axum::{Router, middleware::from_fn, routing::get};
use std::sync::Arc;

pub mod cli;
pub mod colors;
pub mod handlers;
pub mod middleware;
pub mod state;

/// Builds the application router
///
/// Every path falls through to the static file handler; unsupported
/// methods get a 405 from the method router. Both middleware layers
/// wrap everything, so cache-suppression headers land on every
/// response regardless of status.
pub fn app(state: Arc<state::AppState>) -> Router {
    Router::new()
        .fallback(get(handlers::serve_static))
        .layer(from_fn(middleware::suppress_caching))
        .layer(from_fn(middleware::log_requests))
        .with_state(state)
}
