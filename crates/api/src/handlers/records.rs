//! Handlers for the `/records` resource.
//!
//! Thin pass-through to [`RecordService`](watchlist_core::record_service::RecordService);
//! validation and not-found detection live there.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use watchlist_core::record::{CreateRecord, DeletedRecord, UpdateRecord};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /records
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = state.records.list_all().await?;
    Ok(Json(records))
}

/// POST /records
///
/// Create a record. `title`, `genre` and `year` are required; `watched`
/// defaults to `false`.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateRecord>,
) -> AppResult<impl IntoResponse> {
    let record = state.records.create(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /records/{id}
///
/// Apply any subset of `title`, `genre`, `year`, `watched`.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdateRecord>,
) -> AppResult<impl IntoResponse> {
    let record = state.records.update(&id, input).await?;
    Ok(Json(record))
}

/// DELETE /records/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = state.records.delete(&id).await?;
    Ok(Json(DeletedRecord { id, deleted: true }))
}
