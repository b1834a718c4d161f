//! Router setup with all API routes and middleware.
//!
//! Configures the axum Router with CORS, tracing, the identity header and
//! the endpoint handlers.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use datawise_core::config::ServerConfig;
use datawise_core::DatawiseError;

use crate::handlers;
use crate::identity;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
///
/// CORS is fully open: any origin, method and header.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/query", get(handlers::query))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        // Outermost, so CORS preflight responses are stamped too.
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            identity::stamp_identity,
        ))
        .with_state(state)
}

/// Start the HTTP server on the configured host and port.
pub async fn start_server(server: &ServerConfig, state: AppState) -> Result<(), DatawiseError> {
    let addr = format!("{}:{}", server.host, server.port);

    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| DatawiseError::Server(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!(addr = %addr, "API server listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| DatawiseError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
