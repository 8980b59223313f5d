//! Core library for bandcache.
//!
//! Mirrors the upstream band directory into memory and answers the two
//! queries the web front end needs:
//!
//! - [`api`]: `ApiClient` for the upstream REST API (one GET per resource, no retries)
//! - [`models`]: artist, location, date and relation records
//! - [`store`]: `DataStore`, the lock-guarded in-memory `Snapshot`
//! - [`query`]: the artist filter and the concert aggregator

pub mod api;
pub mod models;
pub mod query;
pub mod store;

pub use api::{ApiClient, ApiError, Resource};
pub use models::{Artist, Concert, DateRecord, LocationRecord, RelationRecord};
pub use query::{ArtistFilter, QueryError};
pub use store::{DataStore, Snapshot, SnapshotStats, StoreError};

#[cfg(test)]
pub(crate) mod test_support;
