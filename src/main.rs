//! Tutorial Cache - HTTP server entry point

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tutorial_cache::{api::create_router, spawn_cleanup_task, AppState, Config};

/// Main entry point for the tutorial server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Wire store, cache and the cache-aside service
/// 4. Start background TTL cleanup task
/// 5. Serve the HTTP API until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tutorial_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting tutorial cache server");

    let config = Config::from_env();
    info!(
        max_entries = config.max_entries,
        cache_ttl_secs = config.cache_ttl,
        cache_timeout_ms = config.cache_timeout_ms,
        key_prefix = %config.cache_key_prefix,
        populate_in_background = config.populate_in_background,
        port = config.server_port,
        "Configuration loaded"
    );

    let state = AppState::from_config(&config);

    let cleanup_handle = spawn_cleanup_task(
        state.cache.clone(),
        Duration::from_secs(config.cleanup_interval.max(1)),
    );

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for Ctrl+C or SIGTERM, then stops the cleanup task.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}
