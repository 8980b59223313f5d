use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::Response,
};
use tracing::debug;

use crate::app::AppState;
use crate::templates::IndexPage;

/// Home page with every artist
pub async fn home(State(state): State<Arc<AppState>>) -> Response {
    let artists = state.store.artists().await;
    state.templates.index_response(&IndexPage::list(artists))
}

/// Single-artist view of the home page
pub async fn artist(State(state): State<Arc<AppState>>, Path(raw_id): Path<String>) -> Response {
    // Anything but a positive integer is treated as an unknown page
    let Some(id) = parse_artist_id(&raw_id) else {
        debug!(id = %raw_id, "Invalid artist id");
        return state.templates.error_page(StatusCode::NOT_FOUND);
    };

    let snapshot = state.store.snapshot().await;
    let Some(artist) = snapshot.artist(id).cloned() else {
        return state.templates.error_page(StatusCode::NOT_FOUND);
    };
    let concerts = bandcache_core::query::concerts_for(&snapshot.relations, id);

    state
        .templates
        .index_response(&IndexPage::single(artist, concerts))
}

pub async fn not_found(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    debug!(path = uri.path(), "No route");
    state.templates.error_page(StatusCode::NOT_FOUND)
}

pub async fn method_not_allowed(State(state): State<Arc<AppState>>, method: Method) -> Response {
    debug!(%method, "Method not allowed on page route");
    state.templates.error_page(StatusCode::METHOD_NOT_ALLOWED)
}

fn parse_artist_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id >= 1)
}
