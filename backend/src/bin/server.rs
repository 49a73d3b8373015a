//! Tarot Blog HTTP Server Binary
//!
//! Initializes the repository, sets up the HTTP router and serves requests
//! until Ctrl+C or SIGTERM.
//!
//! # Usage
//!
//! ```bash
//! # Run with local (in-memory) repository (default)
//! cargo run --bin tarot-server
//!
//! # Run against MongoDB
//! DATABASE_URL=mongodb://localhost:27017 DATABASE_NAME=tarot \
//!   cargo run --bin tarot-server --features mongo-repo
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8000)
//! - `DATABASE_URL`: MongoDB connection string (selects the Mongo backend)
//! - `DATABASE_NAME`: MongoDB database name
//! - `REPOSITORY_TYPE`: Force `mongo` or `local`
//! - `RUST_LOG`: Log filter (default: info)

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tarot_blog::config::AppConfig;
use tarot_blog::db::{RepositoryConfig, RepositoryFactory};
use tarot_blog::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Tarot Blog HTTP Server");

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let addr = config.bind_address().map_err(|e| anyhow::anyhow!(e))?;

    // repository.toml wins over the environment when present
    let repository = match RepositoryConfig::from_default_location() {
        Ok(repo_config) => {
            info!("Using repository configuration file");
            RepositoryFactory::from_repository_config(&repo_config).await
        }
        Err(_) => RepositoryFactory::from_env().await,
    }
    .context("failed to initialize repository")?;

    match repository.health_check().await {
        Ok(true) => info!("Repository initialized successfully"),
        Ok(false) => warn!("Repository initialized but reports unhealthy"),
        Err(e) => warn!("Repository health check failed: {}", e),
    }
    if repository.is_in_memory() {
        warn!(
            "Using the in-memory repository: documents are lost on restart. \
             Set DATABASE_URL and DATABASE_NAME (with the mongo-repo feature) to persist them"
        );
    }

    let state = AppState::new(repository, config);
    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("Diagnostics: http://{}/test", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
