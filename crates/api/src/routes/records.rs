//! Route definitions for movie records.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::records;
use crate::state::AppState;

/// Routes mounted at `/records`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(records::list).post(records::create))
        .route("/{id}", put(records::update).delete(records::delete))
}
