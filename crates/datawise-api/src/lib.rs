//! DataWise API crate - axum HTTP server and route handlers.
//!
//! Serves `GET /query` (natural-language questions over the sales dataset)
//! and `GET /health`, stamping every response with the service identity.

pub mod error;
pub mod handlers;
pub mod identity;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
