//! bandcache - a cached mirror of the band directory API.
//!
//! Loads the full upstream snapshot once at startup, then serves the HTML
//! pages and JSON endpoints from memory.

mod app;
mod config;
mod error;
mod handlers;
mod templates;

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bandcache_core::{ApiClient, DataStore};

use crate::app::AppState;
use crate::config::Config;
use crate::templates::Templates;

/// Log filter used when RUST_LOG is not set
const DEFAULT_LOG_FILTER: &str = "bandcache=info,tower_http=info";

/// Log file name prefix inside the configured log directory
const LOG_FILE_PREFIX: &str = "bandcache.log";

/// Initialize the tracing subscriber for logging.
///
/// The returned guard flushes the file writer on drop and must be held
/// until shutdown.
fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = Config::load()?;
    let _log_guard = init_tracing(config.log_dir.as_deref());
    info!("bandcache starting");

    let templates = Templates::load(&config.template_dir).with_context(|| {
        format!("Failed to load templates from {}", config.template_dir.display())
    })?;

    let client = ApiClient::with_base_url(
        config.api_base_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;

    // No data, no service: a failed initial load aborts startup
    let store = Arc::new(DataStore::new());
    store
        .load(&client)
        .await
        .context("Initial load from upstream failed")?;

    let state = Arc::new(AppState::new(store, templates));
    let app = app::build_router(state, &config.static_dir);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, "Listening");

    axum::serve(listener, app).await?;

    info!("bandcache shutting down");
    Ok(())
}
