//! Application state shared across all route handlers.
//!
//! AppState holds the immutable sales store, the question engine and the
//! service identity. It is passed to handlers via axum's State extractor.

use std::sync::Arc;
use std::time::Instant;

use axum::http::HeaderValue;

use datawise_core::config::ServerConfig;
use datawise_engine::QuestionEngine;
use datawise_store::SalesStore;

/// Shared application state.
///
/// All fields are cheap to clone. Nothing here is mutated after startup, so
/// handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The sales dataset, possibly empty when loading failed.
    pub store: Arc<SalesStore>,
    /// Compiled question templates.
    pub engine: Arc<QuestionEngine>,
    /// Identity returned in the `email` field of query responses.
    pub identity: Arc<str>,
    /// Identity as a header value, `None` if it contains invalid header bytes.
    pub identity_header: Option<HeaderValue>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState around an already-built store.
    pub fn new(server: &ServerConfig, store: SalesStore) -> Self {
        let identity_header = match HeaderValue::from_str(&server.identity) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(error = %e, "Identity is not a valid header value; X-Email header disabled");
                None
            }
        };

        Self {
            store: Arc::new(store),
            engine: Arc::new(QuestionEngine::new()),
            identity: Arc::from(server.identity.as_str()),
            identity_header,
            start_time: Instant::now(),
        }
    }
}
