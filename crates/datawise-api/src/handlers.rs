//! Route handler functions for all API endpoints.

use axum::extract::{Query, State};
use axum::http::Uri;
use axum::Json;
use serde::{Deserialize, Serialize};

use datawise_core::Answer;

use crate::error::ApiError;
use crate::state::AppState;

pub const SERVICE_NAME: &str = "DataWise LLM Analytics";

// =============================================================================
// Query parameter types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct QueryParams {
    pub q: Option<String>,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub answer: Answer,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy", or "degraded" when no dataset is loaded.
    pub status: String,
    pub service: String,
    pub version: String,
    pub dataset_loaded: bool,
    pub record_count: u64,
    pub uptime_secs: u64,
}

// =============================================================================
// Handler functions
// =============================================================================

/// GET /query?q=<question> - answer a question about the sales dataset.
///
/// Every outcome of the engine, including an unrecognized question or a
/// missing dataset, is a 200 with an `answer` value.
pub async fn query(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<QueryResponse>, ApiError> {
    let question = params.q.ok_or_else(|| {
        ApiError::UnprocessableEntity("missing required query parameter 'q'".to_string())
    })?;

    let answer = state.engine.answer(&question, &state.store);
    tracing::info!(question = %question, answer = %answer, "Question answered");

    Ok(Json(QueryResponse {
        answer,
        email: state.identity.to_string(),
    }))
}

/// GET /health - health check.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let dataset_loaded = !state.store.is_empty();

    Json(HealthResponse {
        status: if dataset_loaded { "healthy" } else { "degraded" }.to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dataset_loaded,
        record_count: state.store.len() as u64,
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
