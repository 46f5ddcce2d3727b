//! StoreIt Server: file storage with passwordless email sign-in.
//!
//! Main entry point that loads configuration, initializes logging, and
//! serves the application until a shutdown signal arrives.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinError;
use tracing_subscriber::{EnvFilter, fmt};

use storeit_core::config::AppConfig;
use storeit_core::error::AppError;

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
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and the environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("STOREIT_ENV").unwrap_or_else(|_| "development".to_string());
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

/// Serve until a signal arrives, then give in-flight requests the
/// configured grace period.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting StoreIt v{}", env!("CARGO_PKG_VERSION"));

    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let mut server = tokio::spawn(storeit_api::run_server(config, async move {
        let _ = shutdown_rx.changed().await;
    }));

    tokio::select! {
        result = &mut server => return joined(result),
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
            let _ = shutdown_tx.send(true);
        }
    }

    match tokio::time::timeout(grace, server).await {
        Ok(result) => joined(result),
        Err(_) => {
            tracing::warn!(
                grace_seconds = grace.as_secs(),
                "Graceful shutdown timed out; exiting"
            );
            Ok(())
        }
    }
}

fn joined(result: Result<Result<(), AppError>, JoinError>) -> Result<(), AppError> {
    result.map_err(|e| AppError::internal(format!("Server task failed: {e}")))?
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
}
