//! In-memory store for the mirrored directory.
//!
//! This module provides the `DataStore`, which holds the current `Snapshot`
//! of all four upstream collections behind a read/write lock. A snapshot is
//! only ever replaced as a whole: `DataStore::load` fetches everything first
//! and swaps the result in under a short write lock.

pub mod manager;
pub mod snapshot;

use thiserror::Error;

use crate::api::{ApiError, Resource};

pub use manager::DataStore;
pub use snapshot::{Snapshot, SnapshotStats};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to load {resource}: {source}")]
    Load {
        resource: Resource,
        #[source]
        source: ApiError,
    },
}

impl StoreError {
    /// The upstream resource whose fetch failed
    pub fn resource(&self) -> Resource {
        match self {
            StoreError::Load { resource, .. } => *resource,
        }
    }
}
