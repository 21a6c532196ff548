//! HTTP server: router, shared state and startup.

mod handlers;
mod middleware;

pub use middleware::locale_redirect;

use crate::billing::{BillingProvider, StaticBilling};
use crate::config::Config;
use crate::i18n::{Catalog, CatalogValidator};
use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// State shared by all handlers. The catalog is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub billing: Arc<dyn BillingProvider>,
}

impl AppState {
    pub fn new(catalog: Catalog, billing: impl BillingProvider + 'static) -> Self {
        Self {
            catalog: Arc::new(catalog),
            billing: Arc::new(billing),
        }
    }
}

/// Load the catalog configured in `config`, audit it, and build the state.
pub fn build_state(config: &Config) -> Result<AppState> {
    let catalog = match &config.messages_dir {
        Some(dir) => Catalog::load_dir(dir)
            .with_context(|| format!("Failed to load messages from {}", dir.display()))?,
        None => Catalog::bundled().context("Bundled messages are invalid")?,
    };

    let report = CatalogValidator::validate(&catalog);
    for error in &report.errors {
        warn!("Message catalog error: {}", error);
    }
    for warning in &report.warnings {
        warn!("Message catalog: {}", warning);
    }
    if report.is_clean() {
        info!("✓ Message catalog is complete");
    }

    Ok(AppState::new(catalog, StaticBilling))
}

/// Build the application router.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/i18n/metrics", get(handlers::metrics))
        .route("/api/i18n/:locale/:namespace", get(handlers::namespace))
        .route("/api/i18n/:locale/:namespace/:key", get(handlers::translate))
        .route("/:locale", get(handlers::page))
        .route("/:locale/*rest", get(handlers::page))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .fallback(handlers::not_found)
        .layer(axum::middleware::from_fn(locale_redirect))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: &Config, state: AppState) -> Result<()> {
    let app = router(state, &config.static_dir);
    let addr = config.bind_addr();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind {}", addr))?;
    info!("✓ Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
