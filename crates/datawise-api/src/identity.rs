//! Middleware stamping every response with the `X-Email` identity header.

use axum::extract::{Request, State};
use axum::http::HeaderName;
use axum::middleware::Next;
use axum::response::Response;

use crate::state::AppState;

pub const IDENTITY_HEADER: &str = "x-email";

pub async fn stamp_identity(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    if let Some(value) = state.identity_header {
        response
            .headers_mut()
            .insert(HeaderName::from_static(IDENTITY_HEADER), value);
    }
    response
}
