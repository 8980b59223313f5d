use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::api::ApiClient;
use crate::models::{Artist, Concert, DateRecord, LocationRecord};
use crate::query::{concerts_for, ArtistFilter};

use super::{Snapshot, SnapshotStats, StoreError};

/// Shared, lock-guarded holder of the current snapshot.
///
/// Readers clone the `Arc` under the read lock and query outside it; the
/// write lock is only held for the pointer swap, never across network I/O.
pub struct DataStore {
    current: RwLock<Arc<Snapshot>>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::from_snapshot(Snapshot::empty())
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Fetch a full snapshot from upstream and make it current.
    ///
    /// All four resources are fetched before anything is swapped in. If any
    /// fetch fails the error names that resource and the current snapshot is
    /// left exactly as it was.
    pub async fn load(&self, client: &ApiClient) -> Result<(), StoreError> {
        debug!(base_url = client.base_url(), "Loading snapshot from upstream");
        let snapshot = Snapshot::fetch(client).await?;
        let stats = snapshot.stats();
        let concerts: usize = snapshot.relations.iter().map(|r| r.concert_count()).sum();
        self.replace(snapshot).await;

        info!(
            artists = stats.artists,
            locations = stats.locations,
            dates = stats.dates,
            relations = stats.relations,
            concerts,
            "Snapshot loaded"
        );
        Ok(())
    }

    /// Swap in a new snapshot under the write lock
    pub async fn replace(&self, snapshot: Snapshot) {
        let snapshot = Arc::new(snapshot);
        let mut current = self.current.write().await;
        *current = snapshot;
    }

    /// A consistent view of all four collections
    pub async fn snapshot(&self) -> Arc<Snapshot> {
        self.current.read().await.clone()
    }

    pub async fn stats(&self) -> SnapshotStats {
        self.snapshot().await.stats()
    }

    pub async fn artists(&self) -> Vec<Artist> {
        self.snapshot().await.artists.clone()
    }

    pub async fn artist(&self, id: i64) -> Option<Artist> {
        self.snapshot().await.artist(id).cloned()
    }

    pub async fn locations_for(&self, id: i64) -> Option<LocationRecord> {
        self.snapshot().await.locations_for(id).cloned()
    }

    pub async fn dates_for(&self, id: i64) -> Option<DateRecord> {
        self.snapshot().await.dates_for(id).cloned()
    }

    pub async fn filter(&self, filter: &ArtistFilter) -> Vec<Artist> {
        filter.apply(&self.snapshot().await.artists)
    }

    pub async fn concerts(&self, artist_id: i64) -> Vec<Concert> {
        concerts_for(&self.snapshot().await.relations, artist_id)
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}
