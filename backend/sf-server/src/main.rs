use sf_config::{AddressBackend, Config};
use sf_core::AddressStore;
use sf_db::{MemoryAddressStore, SessionRepository, SqliteAddressStore};
use sf_server::{AppState, ServerError, ServerResult, build_router, logger};

use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use sqlx::SqlitePool;
use tokio::net::TcpListener;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(3600);

#[tokio::main]
async fn main() -> ServerResult<()> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting sf-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database (migrations run on connect)
    let database_path = config.database_path()?;
    let pool = sf_db::connect(&database_path, config.database.max_connections).await?;
    info!("Database connection established");

    let address_store: Arc<dyn AddressStore> = match config.storage.address_backend {
        AddressBackend::Sqlite => Arc::new(SqliteAddressStore::new(pool.clone())),
        AddressBackend::Memory => {
            warn!("Shipping addresses kept in memory - lost on restart");
            Arc::new(MemoryAddressStore::new())
        }
    };

    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: e.to_string(),
        })?;
    info!("Prometheus recorder installed");

    let app_state =
        AppState::new(pool.clone(), address_store, config.auth.clone()).with_prometheus(prometheus);

    spawn_session_sweeper(pool);

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Actual address matters when port is 0 (auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await
        }
    }
}

/// Periodically drop expired sessions
fn spawn_session_sweeper(pool: SqlitePool) {
    tokio::spawn(async move {
        let sessions = SessionRepository::new(pool);
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);

        loop {
            interval.tick().await;
            match sessions.delete_expired(chrono::Utc::now()).await {
                Ok(0) => {}
                Ok(removed) => info!("Removed {} expired sessions", removed),
                Err(e) => warn!("Expired session cleanup failed: {}", e),
            }
        }
    });
}
