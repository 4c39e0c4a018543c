//! Restaurants Server
//!
//! A CRUD REST API over a restaurant document collection.

mod seed;

use std::sync::Arc;

use clap::Parser;
use restaurants_persistence::core::Backend;
use restaurants_rest::{ServerConfig, create_app_with_shared_storage, init_logging};
use tracing::{error, info};

#[cfg(feature = "sqlite")]
use restaurants_persistence::backends::sqlite::{SqliteBackend, SqliteBackendConfig};

/// Creates and initializes a SQLite backend from the server configuration.
#[cfg(feature = "sqlite")]
async fn create_sqlite_backend(config: &ServerConfig) -> anyhow::Result<SqliteBackend> {
    let db_path = config.database_url.as_str();
    info!(database = %db_path, "Initializing SQLite backend");

    let backend = SqliteBackend::with_config(db_path, SqliteBackendConfig::default())?;
    backend.initialize().await?;

    Ok(backend)
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install ctrl-c handler; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping server...");
}

/// Starts the Axum HTTP server and blocks until shutdown.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        database = %config.database_url,
        "Starting Restaurants Server"
    );

    start_sqlite(config).await
}

/// Starts the server with the SQLite backend.
#[cfg(feature = "sqlite")]
async fn start_sqlite(config: ServerConfig) -> anyhow::Result<()> {
    let backend = Arc::new(create_sqlite_backend(&config).await?);

    if let Some(path) = &config.seed_file {
        seed::seed_if_empty(backend.as_ref(), path).await?;
    }

    let app = create_app_with_shared_storage(Arc::clone(&backend), config.clone());
    let served = serve(app, &config).await;

    backend.close().await?;
    info!("Server stopped");
    served
}

/// Fallback when sqlite feature is not enabled.
#[cfg(not(feature = "sqlite"))]
async fn start_sqlite(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The sqlite backend requires the 'sqlite' feature. \
         Build with: cargo build -p restaurants-server --features sqlite"
    )
}
