use crate::models::{Concert, RelationRecord};

/// All concerts of one artist, sorted by date.
///
/// Only the first relation record with a matching `id` is used. Location
/// names and dates are trimmed. Dates are compared as plain strings, so the
/// order is chronological only when the upstream format sorts lexically
/// (`YYYY-MM-DD` does, `DD-MM-YYYY` does not). The sort is stable, so
/// concerts on the same date keep venue-name order.
pub fn concerts_for(relations: &[RelationRecord], artist_id: i64) -> Vec<Concert> {
    let Some(relation) = relations.iter().find(|r| r.id == artist_id) else {
        return Vec::new();
    };

    let mut concerts: Vec<Concert> = relation
        .dates_locations
        .iter()
        .flat_map(|(location, dates)| {
            let location = location.trim();
            dates
                .iter()
                .map(move |date| Concert::new(date.trim(), location))
        })
        .collect();

    concerts.sort_by(|a, b| a.date.cmp(&b.date));
    concerts
}
