//! Health probe endpoints.
//!
//! - `/livez` - liveness probe (immediate 200, no checks)
//! - `/healthz` - readiness probe (round-trips the storage backend)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting
/// connections, regardless of backend reachability.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Storage readiness probe.
///
/// Lists the collection to verify the backend answers; 503 with the error
/// when it does not.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.whisky_repo.list_all().await {
        Ok(whiskies) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ok",
                "whiskies": whiskies.len(),
            })),
        )
            .into_response(),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "status": "unavailable",
                "error": err.to_string(),
            })),
        )
            .into_response(),
    }
}
