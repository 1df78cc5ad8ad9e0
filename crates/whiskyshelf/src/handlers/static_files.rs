//! Static file serving handler for the assets directory.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, Response, StatusCode},
    response::IntoResponse,
};
use std::fs;

use crate::state::AppState;

fn not_found() -> Response<Body> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::from("Not found"))
        .unwrap()
}

/// Serve static files from the configured assets directory.
pub async fn serve_asset(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> impl IntoResponse {
    // Requests must stay inside the assets directory.
    if path.split('/').any(|segment| segment == "..") {
        return not_found();
    }

    let file_path = format!("{}/{}", state.assets_dir, path);

    match fs::read(&file_path) {
        Ok(contents) => {
            // Determine content type based on extension
            let content_type = if path.ends_with(".html") {
                "text/html; charset=utf-8"
            } else if path.ends_with(".js") {
                "application/javascript; charset=utf-8"
            } else if path.ends_with(".css") {
                "text/css; charset=utf-8"
            } else if path.ends_with(".json") {
                "application/json"
            } else {
                "application/octet-stream"
            };

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(contents))
                .unwrap()
        }
        Err(_) => not_found(),
    }
}
