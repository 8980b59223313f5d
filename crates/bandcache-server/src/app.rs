//! Router and shared application state.

use std::path::Path;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use bandcache_core::DataStore;

use crate::handlers::{api, pages};
use crate::templates::Templates;

/// Application state shared across handlers.
pub struct AppState {
    pub store: Arc<DataStore>,
    pub templates: Templates,
}

impl AppState {
    pub fn new(store: Arc<DataStore>, templates: Templates) -> Self {
        Self { store, templates }
    }
}

pub fn build_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(pages::home).fallback(pages::method_not_allowed))
        .route(
            "/artist/:id",
            get(pages::artist).fallback(pages::method_not_allowed),
        )
        .route("/filter", get(api::filter))
        .route("/concerts/data", get(api::concerts))
        .route("/health", get(api::health))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(pages::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
