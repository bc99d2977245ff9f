//! HTTP server.
//!
//! Endpoints:
//! - GET /query - relay a query, respond with the first chunk
//! - GET /next - next chunk of the most recent reply
//! - GET /healthz - liveness probe

pub mod error;
mod handlers;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::relay::Relay;
use crate::upstream::OpenRouterClient;

pub use error::{ApiError, ApiResult};

/// Creates the router with all endpoints.
pub fn create_router(relay: Arc<Relay>) -> Router {
    Router::new()
        .route("/healthz", get(handlers::health_handler))
        .route("/query", get(handlers::query_handler))
        .route("/next", get(handlers::next_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(relay)
}

/// Runs the HTTP server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the upstream client cannot be built or the listener
/// cannot be bound.
pub async fn run(config: Config) -> Result<()> {
    let client = OpenRouterClient::new(config.upstream.clone())?;
    let relay = Arc::new(Relay::from_config(&config, Arc::new(client)));
    let app = create_router(relay);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!(addr = %listener.local_addr()?, "server listening");
    info!(
        model = %config.upstream.model,
        api_key_present = config.upstream.api_key.is_some(),
        max_length = config.limits.max_length,
        max_lines = config.limits.max_lines,
        "upstream configured"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
