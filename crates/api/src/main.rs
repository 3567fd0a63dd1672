use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use watchlist_core::memory_store::MemoryRecordStore;
use watchlist_core::record_service::RecordService;
use watchlist_core::store::RecordStore;
use watchlist_db::pg_store::PgRecordStore;

use watchlist_api::config::{ConfigError, ServerConfig, StoreBackend};
use watchlist_api::router::build_app_router;
use watchlist_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "watchlist_api=debug,watchlist_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env()?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        store = %config.store_backend,
        "Loaded server configuration",
    );

    // --- Record store ---
    let store = connect_store(&config).await?;

    // --- App state ---
    let state = AppState {
        records: RecordService::new(store),
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config)?;

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            var: "HOST",
            value: config.host.clone(),
            reason: e.to_string(),
        })?,
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Build the configured [`RecordStore`].
///
/// For Postgres this connects, checks health, and applies migrations before
/// the server accepts traffic.
async fn connect_store(config: &ServerConfig) -> anyhow::Result<Arc<dyn RecordStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory record store; records are lost on restart");
            Ok(Arc::new(MemoryRecordStore::new()))
        }
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or(ConfigError::Missing {
                    var: "DATABASE_URL",
                })?;

            let pool = watchlist_db::create_pool(database_url, config.db_max_connections)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connection pool created");

            watchlist_db::health_check(&pool)
                .await
                .context("Database health check failed")?;
            tracing::info!("Database health check passed");

            watchlist_db::run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(PgRecordStore::new(pool)))
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
