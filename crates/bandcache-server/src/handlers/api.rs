use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use bandcache_core::{Artist, ArtistFilter, Concert, SnapshotStats};

use crate::app::AppState;
use crate::error::JsonError;

/// Raw query pairs in request order. Repeated keys are allowed.
pub type QueryPairs = Vec<(String, String)>;

/// First value given for `name`, ignoring any repeats
fn first_param<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// "just now", "5m ago", ...
    pub age: String,
    #[serde(flatten)]
    pub snapshot: SnapshotStats,
}

/// Artists by id or creation year.
pub async fn filter(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryPairs>,
) -> Result<Json<Vec<Artist>>, JsonError> {
    let filter = ArtistFilter::from_params(first_param(&params, "id"), first_param(&params, "year"))?;
    Ok(Json(state.store.filter(&filter).await))
}

/// Concerts of one artist, sorted by date. Unknown ids give an empty list.
pub async fn concerts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryPairs>,
) -> Result<Json<Vec<Concert>>, JsonError> {
    let id = first_param(&params, "id")
        .and_then(|raw| raw.parse::<i64>().ok())
        .ok_or_else(|| JsonError::bad_request("Invalid artist ID"))?;

    Ok(Json(state.store.concerts(id).await))
}

/// Health check endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let snapshot = state.store.snapshot().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        age: snapshot.age_display(),
        snapshot: snapshot.stats(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_first_param_takes_first_repeat() {
        let params = pairs(&[("year", "1965"), ("id", ""), ("year", "1970")]);
        assert_eq!(first_param(&params, "year"), Some("1965"));
        assert_eq!(first_param(&params, "id"), Some(""));
        assert_eq!(first_param(&params, "name"), None);
    }
}
