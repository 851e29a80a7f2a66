//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{routing::get, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::api;
use crate::models::AppConfig;
use crate::services::PageBuilder;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub page_builder: Arc<PageBuilder>,
    pub media_dir: PathBuf,
}

/// Create application state from a loaded configuration.
///
/// `media_dir` overrides the configured media directory when set (the
/// `ASSETS_DIR` environment variable in production).
pub fn create_app_state(
    config: Arc<AppConfig>,
    media_dir: Option<PathBuf>,
) -> anyhow::Result<AppState> {
    let media_dir = media_dir.unwrap_or_else(|| config.media_dir.clone());
    let page_builder = Arc::new(
        PageBuilder::new(config.clone(), media_dir.clone(), "/media")
            .map_err(|e| anyhow::anyhow!("Failed to create page builder: {e}"))?,
    );

    Ok(AppState {
        config,
        page_builder,
        media_dir,
    })
}

/// Build the router with all endpoints and middleware.
///
/// This is the core router used by both production and tests. The media
/// directory is served as-is so the path-referenced video (and any other
/// raw asset) can be fetched next to the inlined page.
pub fn build_router(state: AppState) -> Router {
    let media_dir = state.media_dir.clone();

    Router::new()
        .route("/", get(api::handle_page))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .nest_service("/media", ServeDir::new(media_dir))
        .layer(TraceLayer::new_for_http())
}
