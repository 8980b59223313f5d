use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::api::{ApiClient, ApiError, Resource};
use crate::models::{Artist, DateRecord, LocationRecord, RelationRecord};

use super::StoreError;

/// Everything fetched from upstream at one point in time.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub artists: Vec<Artist>,
    pub locations: Vec<LocationRecord>,
    pub dates: Vec<DateRecord>,
    pub relations: Vec<RelationRecord>,
    /// `None` until the first successful load
    pub loaded_at: Option<DateTime<Utc>>,
}

/// Collection sizes and load time, for the health endpoint and startup logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotStats {
    pub artists: usize,
    pub locations: usize,
    pub dates: usize,
    pub relations: usize,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// The state before anything has been loaded
    pub fn empty() -> Self {
        Self {
            artists: Vec::new(),
            locations: Vec::new(),
            dates: Vec::new(),
            relations: Vec::new(),
            loaded_at: None,
        }
    }

    /// Assemble a snapshot stamped with the current time
    pub fn from_parts(
        artists: Vec<Artist>,
        locations: Vec<LocationRecord>,
        dates: Vec<DateRecord>,
        relations: Vec<RelationRecord>,
    ) -> Self {
        Self {
            artists,
            locations,
            dates,
            relations,
            loaded_at: Some(Utc::now()),
        }
    }

    /// Fetch all four collections in order, stopping at the first failure.
    pub async fn fetch(client: &ApiClient) -> Result<Self, StoreError> {
        let load = |resource: Resource| move |source: ApiError| StoreError::Load { resource, source };

        let artists = client.fetch_artists().await.map_err(load(Resource::Artists))?;
        let locations = client.fetch_locations().await.map_err(load(Resource::Locations))?;
        let dates = client.fetch_dates().await.map_err(load(Resource::Dates))?;
        let relations = client.fetch_relations().await.map_err(load(Resource::Relations))?;

        debug!(
            artists = artists.len(),
            locations = locations.len(),
            dates = dates.len(),
            relations = relations.len(),
            "Fetched candidate snapshot"
        );

        Ok(Self::from_parts(artists, locations, dates, relations))
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    pub fn stats(&self) -> SnapshotStats {
        SnapshotStats {
            artists: self.artists.len(),
            locations: self.locations.len(),
            dates: self.dates.len(),
            relations: self.relations.len(),
            loaded_at: self.loaded_at,
        }
    }

    pub fn artist(&self, id: i64) -> Option<&Artist> {
        self.artists.iter().find(|a| a.id == id)
    }

    pub fn locations_for(&self, id: i64) -> Option<&LocationRecord> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn dates_for(&self, id: i64) -> Option<&DateRecord> {
        self.dates.iter().find(|d| d.id == id)
    }

    pub fn age_minutes(&self) -> Option<i64> {
        self.loaded_at.map(|at| (Utc::now() - at).num_minutes())
    }

    pub fn age_display(&self) -> String {
        let Some(minutes) = self.age_minutes() else {
            return "never".to_string();
        };
        if minutes < 1 {
            // Also covers clock skew
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            format!("{}h ago", minutes / 60)
        } else {
            format!("{}d ago", minutes / 1440)
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}
