use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// Response wrapper for /locations, /dates and /relation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexEnvelope<T> {
    pub index: Vec<T>,
}

impl<T> IndexEnvelope<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.index
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: i64,
    #[serde(default)]
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRecord {
    pub id: i64,
    #[serde(default)]
    pub dates: Vec<String>,
}

/// Venue name -> dates the artist played there.
///
/// Kept as a `BTreeMap` so iteration order does not depend on hashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRecord {
    pub id: i64,
    #[serde(rename = "datesLocations", default)]
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

impl RelationRecord {
    pub fn concert_count(&self) -> usize {
        self.dates_locations.values().map(Vec::len).sum()
    }
}
