pub mod health;
pub mod records;

use axum::Router;

use crate::state::AppState;

/// Build the record route tree, mounted at the root.
///
/// ```text
/// /records                 list, create
/// /records/{id}            update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/records", records::router())
}
