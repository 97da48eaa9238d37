//! HTTP layer: webhook endpoint, shared state, app errors.

use std::{env, sync::Arc};

pub mod core;
pub mod error_handler;
pub mod routes;

pub use crate::core::app_state::AppState;
pub use error_handler::{AppError, AppResult};

use axum::{Router, routing::post};
use tokio::signal;
use tracing::info;

use crate::routes::webhook::webhook_route::webhook_route;

/// Builds the application router. Exposed so tests can drive the routes
/// in-process without binding a socket.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/webhook", post(webhook_route))
        .with_state(state)
}

/// Loads config, builds collaborator clients and serves until Ctrl+C.
pub async fn start() -> AppResult<()> {
    let state = Arc::new(AppState::from_env()?);
    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8001".into());

    info!("--- Starting AI Code Review Bot ---");
    info!("model: {}", state.llm.model());

    let app = app(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!("listening on {host_url}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    // Wait for the Ctrl+C signal
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
