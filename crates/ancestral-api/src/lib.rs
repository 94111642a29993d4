//! Ancestral Hall — HTTP presentation adapter.
//!
//! A thin axum layer over the session engine so a browser renderer can
//! drive it. Sessions live in memory only.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod timers;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router.
pub fn build_router(app_state: AppState) -> Router {
    // TODO: Replace CorsLayer::permissive() with the renderer's origin once it is hosted.
    Router::new()
        .merge(routes::health::router())
        .nest(
            "/api/v1/sessions",
            routes::sessions::router()
                .merge(routes::play::router())
                .merge(routes::puzzles::router()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
