//! Records API
//!
//! A small CRUD service over a single `records` table (id, name, email).
//! Every HTTP operation maps to exactly one SQL statement.

mod config;
mod db;
mod error;
mod models;
mod records;
mod routes;
mod state;

use crate::config::{Settings, StoreBackend};
use crate::db::PgRecordStore;
use crate::records::{MemoryRecordStore, RecordStore};
use crate::routes::create_router;
use crate::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for structured logging
    init_tracing();

    info!("Starting Records API...");

    // Load configuration
    let settings = Settings::load()?;
    info!("Configuration loaded (store: {:?})", settings.store);

    let records = init_store(&settings).await?;
    let state = Arc::new(AppState::new(records));

    // Build the router
    let app = create_router(state, &settings);

    let addr = SocketAddr::from((settings.server.host, settings.server.port));
    info!("Server listening on http://{}", addr);
    info!("   GET    /records       - List records");
    info!("   POST   /records       - Create record");
    info!("   PUT    /records/{{id}}  - Update record");
    info!("   DELETE /records/{{id}}  - Delete record");

    // Create TCP listener and serve
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing with structured logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,records_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}

/// Build the configured record store, preparing the table for Postgres
async fn init_store(settings: &Settings) -> anyhow::Result<Arc<dyn RecordStore>> {
    match settings.store {
        StoreBackend::Postgres => {
            let pool = db::create_pool(&settings.database)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to initialize database pool: {}", e))?;
            db::init_schema(&pool)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create records table: {}", e))?;
            Ok(Arc::new(PgRecordStore::new(pool)))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory record store; data is lost on shutdown");
            Ok(Arc::new(MemoryRecordStore::new()))
        }
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        },
    }
}
