//! Request extractors with JSON error bodies.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejection is an [`AppError`], so malformed bodies get
/// the same `{ "error", "code" }` shape as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
