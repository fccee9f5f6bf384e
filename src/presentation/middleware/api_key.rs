use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::presentation::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const API_KEY_MISSING: &str = "API Key is missing";
pub const UNAUTHORIZED_CLIENT: &str = "Unauthorized client";

const OPEN_SEGMENTS: [&str; 2] = ["ping", "health"];

/// Shared-secret gate. Probes are open; everything else needs `X-API-Key`
/// matching the configured key.
pub async fn api_key_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if is_open_path(request.uri().path()) {
        return next.run(request).await;
    }

    let Some(provided) = request.headers().get(API_KEY_HEADER) else {
        tracing::warn!(path = %request.uri().path(), "Request without API key");
        return (StatusCode::UNAUTHORIZED, API_KEY_MISSING).into_response();
    };

    let authorized = state
        .settings
        .auth
        .api_key
        .as_deref()
        .filter(|k| !k.is_empty())
        .is_some_and(|key| provided.as_bytes() == key.as_bytes());

    if !authorized {
        tracing::warn!(path = %request.uri().path(), "Request with invalid API key");
        return (StatusCode::UNAUTHORIZED, UNAUTHORIZED_CLIENT).into_response();
    }

    next.run(request).await
}

fn is_open_path(path: &str) -> bool {
    let first = path.trim_start_matches('/').split('/').next().unwrap_or_default();
    OPEN_SEGMENTS
        .iter()
        .any(|open| first.eq_ignore_ascii_case(open))
}
