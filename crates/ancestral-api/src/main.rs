//! Ancestral Hall API server entry point.

use std::sync::Arc;

use ancestral_api::config::ServerConfig;
use ancestral_api::error::AppError;
use ancestral_api::state::AppState;
use ancestral_api::{build_router, timers};
use ancestral_core::clock::SystemClock;
use ancestral_narrative::Timings;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Ancestral Hall API server");

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;

    let app_state = AppState::new(Arc::new(SystemClock), Timings::default());
    let _timer_driver = timers::spawn_timer_driver(app_state.clone(), config.timer_tick);
    let app = build_router(app_state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
