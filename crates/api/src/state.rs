use std::sync::Arc;

use watchlist_core::record_service::RecordService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Record operations over the configured store.
    pub records: RecordService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
