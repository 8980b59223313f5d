use crate::models::Artist;

use super::QueryError;

/// Earliest creation year accepted by the year filter (inclusive)
pub const MIN_YEAR: i64 = 1900;

/// Latest creation year accepted by the year filter (inclusive)
pub const MAX_YEAR: i64 = 2025;

/// Selection applied to the artist collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistFilter {
    All,
    ById(i64),
    ByYear(i64),
}

impl ArtistFilter {
    /// Build a filter from raw query parameters.
    ///
    /// Empty strings count as absent. `id` takes precedence over `year`, and
    /// a year of `"0"` means no filter.
    pub fn from_params(id: Option<&str>, year: Option<&str>) -> Result<Self, QueryError> {
        let id = id.filter(|s| !s.is_empty());
        let year = year.filter(|s| !s.is_empty());

        if let Some(raw) = id {
            let id = raw
                .parse::<i64>()
                .map_err(|_| QueryError::invalid("id", raw, "not an integer"))?;
            return Ok(ArtistFilter::ById(id));
        }

        match year {
            None | Some("0") => Ok(ArtistFilter::All),
            Some(raw) => {
                let year = raw
                    .parse::<i64>()
                    .map_err(|_| QueryError::invalid("year", raw, "not an integer"))?;
                if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
                    return Err(QueryError::invalid(
                        "year",
                        raw,
                        format!("must be between {} and {}", MIN_YEAR, MAX_YEAR),
                    ));
                }
                Ok(ArtistFilter::ByYear(year))
            }
        }
    }

    pub fn matches(&self, artist: &Artist) -> bool {
        match self {
            ArtistFilter::All => true,
            ArtistFilter::ById(id) => artist.id == *id,
            ArtistFilter::ByYear(year) => artist.creation_date == *year,
        }
    }

    /// Select artists in collection order.
    pub fn apply(&self, artists: &[Artist]) -> Vec<Artist> {
        match self {
            // Identifiers are unique; stop at the first hit
            ArtistFilter::ById(_) => artists
                .iter()
                .find(|a| self.matches(a))
                .cloned()
                .into_iter()
                .collect(),
            _ => artists.iter().filter(|a| self.matches(a)).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(id: i64, name: &str, creation_date: i64) -> Artist {
        Artist {
            id,
            name: name.to_string(),
            image: format!("https://example.test/{}.jpeg", id),
            creation_date,
            first_album: "01-01-2000".to_string(),
            members: vec![name.to_string()],
        }
    }

    fn sample() -> Vec<Artist> {
        vec![
            artist(1, "Queen", 1970),
            artist(2, "SOJA", 1997),
            artist(3, "Pink Floyd", 1965),
            artist(4, "Scorpions", 1965),
            artist(5, "XXXTentacion", 2013),
        ]
    }

    #[test]
    fn test_from_params_precedence() {
        assert_eq!(ArtistFilter::from_params(None, None), Ok(ArtistFilter::All));
        assert_eq!(ArtistFilter::from_params(Some(""), Some("")), Ok(ArtistFilter::All));
        assert_eq!(ArtistFilter::from_params(None, Some("0")), Ok(ArtistFilter::All));
        assert_eq!(ArtistFilter::from_params(Some("3"), Some("1965")), Ok(ArtistFilter::ById(3)));
        assert_eq!(ArtistFilter::from_params(Some(""), Some("1965")), Ok(ArtistFilter::ByYear(1965)));
        // An invalid year is ignored when an id is given
        assert_eq!(ArtistFilter::from_params(Some("3"), Some("abc")), Ok(ArtistFilter::ById(3)));
    }

    #[test]
    fn test_invalid_id() {
        let err = ArtistFilter::from_params(Some("abc"), None).unwrap_err();
        let QueryError::InvalidArgument { param, value, .. } = err;
        assert_eq!(param, "id");
        assert_eq!(value, "abc");
    }

    #[test]
    fn test_year_bounds_are_inclusive() {
        assert_eq!(ArtistFilter::from_params(None, Some("1900")), Ok(ArtistFilter::ByYear(1900)));
        assert_eq!(ArtistFilter::from_params(None, Some("2025")), Ok(ArtistFilter::ByYear(2025)));

        for raw in ["1899", "2026", "-1970", "00", "19x0", "1970.0"] {
            let result = ArtistFilter::from_params(None, Some(raw));
            assert!(
                matches!(result, Err(QueryError::InvalidArgument { param: "year", .. })),
                "year {:?} should be rejected, got {:?}",
                raw,
                result
            );
        }
    }

    #[test]
    fn test_by_id_returns_single_match() {
        let artists = sample();
        for a in &artists {
            let found = ArtistFilter::ById(a.id).apply(&artists);
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].id, a.id);
        }
        assert!(ArtistFilter::ById(99).apply(&artists).is_empty());
    }

    #[test]
    fn test_by_year_partitions_collection() {
        let artists = sample();
        for year in MIN_YEAR..=MAX_YEAR {
            let filter = ArtistFilter::ByYear(year);
            let selected = filter.apply(&artists);
            assert!(selected.iter().all(|a| a.creation_date == year));

            let rejected = artists.iter().filter(|a| !selected.iter().any(|s| s.id == a.id));
            assert!(rejected.into_iter().all(|a| a.creation_date != year));
        }

        let names: Vec<String> = ArtistFilter::ByYear(1965)
            .apply(&artists)
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["Pink Floyd", "Scorpions"]);
    }

    #[test]
    fn test_all_preserves_order() {
        let artists = sample();
        assert_eq!(ArtistFilter::All.apply(&artists), artists);
    }
}
