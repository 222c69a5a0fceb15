//! Franchise SaaS backend server.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use franchise_api::AppState;
use franchise_core::config::{AppConfig, StoreBackend};
use franchise_core::error::AppError;
use franchise_database::repositories::{
    ChecklistRepository, MemoryChecklistStore, MemoryUserStore, UserRepository,
};
use franchise_database::{ChecklistStore, DatabasePool, UserStore};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from files and environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("FRANCHISE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = ?config.database.backend,
        "Starting franchise server"
    );

    if config.auth.uses_dev_secret() {
        tracing::warn!("Using the development JWT secret; set FRANCHISE__AUTH__JWT_SECRET in production");
    }

    let (users, checklists, pool): (Arc<dyn UserStore>, Arc<dyn ChecklistStore>, _) =
        match config.database.backend {
            StoreBackend::Postgres => {
                let pool = DatabasePool::connect(&config.database).await?;
                (
                    Arc::new(UserRepository::new(pool.pool())),
                    Arc::new(ChecklistRepository::new(pool.pool())),
                    Some(pool),
                )
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory stores; data is lost on restart");
                (
                    Arc::new(MemoryUserStore::new()),
                    Arc::new(MemoryChecklistStore::new()),
                    None,
                )
            }
        };

    let state = AppState::new(config, users, checklists);
    franchise_api::serve(state, shutdown_signal()).await?;

    if let Some(pool) = pool {
        pool.close().await;
    }
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
