//! Server setup and initialization
//!
//! Provides the application builder and server runner. The database pool
//! is lazy, so startup succeeds even when the database is down; a single
//! probe logs which case we are in.

use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use chatlog_common::AppConfig;
use chatlog_db::{create_pool, database_name, probe, TableConfig};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router(&state.config().static_dir);
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let table = TableConfig::resolve(
        config.archive.schema.as_deref(),
        config.archive.table.as_deref(),
    );
    let database = database_name(&config.database);
    let pool = create_pool(&config.database).context("invalid database configuration")?;

    info!(
        schema = table.schema(),
        table = table.table(),
        database = %database,
        "Archive table resolved"
    );

    Ok(AppState::new(pool, table, database, config))
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = create_app_state(config)?;

    match probe(state.pool()).await {
        Ok(()) => info!("Database connection verified"),
        Err(error) => warn!(error = %error, "Database unreachable at startup, serving anyway"),
    }

    let pool = state.pool().clone();
    let app = create_app(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    info!("Server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Draining database pool");
    pool.close().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
