//! Whisky CRUD handlers.
//!
//! Each handler translates one HTTP operation into a single storage
//! adapter call and maps the outcome onto a status code. A body that does
//! not parse never reaches the storage adapter.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use whiskyshelf_core::storage::RepositoryError;
use whiskyshelf_core::whisky::{Whisky, WhiskyId};

use crate::{
    handlers::AppError,
    models::{CreateWhisky, UpdateWhisky},
    state::AppState,
};

/// Error response with message (for body validation errors).
fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, String) {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, msg)
}

/// List the whole collection (GET /api/whiskies).
pub async fn list_whiskies(State(state): State<AppState>) -> Result<Json<Vec<Whisky>>, AppError> {
    let whiskies = state.whisky_repo.list_all().await?;

    Ok(Json(whiskies))
}

/// Create a new whisky (POST /api/whiskies).
pub async fn create_whisky(
    State(state): State<AppState>,
    body: Result<Json<CreateWhisky>, JsonRejection>,
) -> Result<(StatusCode, Json<Whisky>), Response> {
    let Json(payload) = body.map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Failed to parse body: {e}"))
            .into_response()
    })?;

    let whisky = state
        .whisky_repo
        .create(payload.into_whisky())
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    tracing::info!(id = ?whisky.id, name = %whisky.name, "Created whisky");

    Ok((StatusCode::CREATED, Json(whisky)))
}

/// Get a single whisky by id (GET /api/whiskies/{id}).
pub async fn get_whisky(
    State(state): State<AppState>,
    Path(id): Path<WhiskyId>,
) -> Result<Json<Whisky>, AppError> {
    let whisky = state.whisky_repo.get_by_id(&id).await?;

    match whisky {
        Some(w) => Ok(Json(w)),
        None => Err(RepositoryError::NotFound { id: id.to_string() }.into()),
    }
}

/// Update a whisky in place (PUT /api/whiskies/{id}).
///
/// Both fields are replaced; the id never changes.
pub async fn update_whisky(
    State(state): State<AppState>,
    Path(id): Path<WhiskyId>,
    body: Result<Json<UpdateWhisky>, JsonRejection>,
) -> Result<Json<Whisky>, Response> {
    let Json(payload) = body.map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Failed to parse body: {e}"))
            .into_response()
    })?;

    let whisky = state
        .whisky_repo
        .update_by_id(&id, payload.into_whisky())
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    tracing::info!(id = %id, name = %whisky.name, "Updated whisky");

    Ok(Json(whisky))
}

/// Delete a whisky (DELETE /api/whiskies/{id}).
///
/// Deleting an id that is already gone still answers 204.
pub async fn delete_whisky(
    State(state): State<AppState>,
    Path(id): Path<WhiskyId>,
) -> Result<StatusCode, AppError> {
    state.whisky_repo.delete_by_id(&id).await?;

    tracing::info!(id = %id, "Deleted whisky");

    Ok(StatusCode::NO_CONTENT)
}
