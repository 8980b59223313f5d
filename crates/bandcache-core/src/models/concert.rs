use serde::{Deserialize, Serialize};

/// One performance of an artist: a trimmed date string and a trimmed location name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Concert {
    pub date: String,
    pub location: String,
}

impl Concert {
    pub fn new(date: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            location: location.into(),
        }
    }
}
