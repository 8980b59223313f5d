use std::fmt;

/// The four upstream collections that make up a snapshot, in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Artists,
    Locations,
    Dates,
    Relations,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Artists,
        Resource::Locations,
        Resource::Dates,
        Resource::Relations,
    ];

    /// Path segment under the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Artists => "artists",
            Resource::Locations => "locations",
            Resource::Dates => "dates",
            // Upstream uses the singular form for this one
            Resource::Relations => "relation",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Artists => write!(f, "artists"),
            Resource::Locations => write!(f, "locations"),
            Resource::Dates => write!(f, "dates"),
            Resource::Relations => write!(f, "relations"),
        }
    }
}
