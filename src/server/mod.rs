mod error;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::{TranslateRequest, TranslateResponse, create_routes};
pub use state::AppState;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the application router with CORS and request tracing attached.
///
/// CORS is permissive: the endpoint is consumed cross-origin by browser
/// extension frontends.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `host:port` and serves the application until shutdown.
pub async fn serve(state: AppState, host: &str, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))?;

    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state))
        .await
        .context("Server error")
}
