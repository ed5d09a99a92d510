//! Numeric range and venue filtering over the catalog

use stagetrack_common::dates::extract_year;
use stagetrack_common::models::{FilterCriteria, FullArtist};
use stagetrack_common::text;

use crate::store::Catalog;

/// Apply the filter criteria over every artist in the catalog.
///
/// Numeric bounds treat 0 as "no constraint"; rejection order is creation
/// year, then first-album year, then member count. Survivors carry the
/// derived first-album year with join fields empty, unless the venue
/// sub-filter runs: that pass needs the joined location lists, so it pays
/// for a full join of each survivor.
pub fn filter_artists(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<FullArtist> {
    let mut filtered = Vec::new();

    for artist in catalog.artists() {
        if criteria.creation_min > 0 && artist.creation_date < criteria.creation_min {
            continue;
        }
        if criteria.creation_max > 0 && artist.creation_date > criteria.creation_max {
            continue;
        }

        let first_album_year = extract_year(&artist.first_album);
        if criteria.album_min > 0 && first_album_year < criteria.album_min {
            continue;
        }
        if criteria.album_max > 0 && first_album_year > criteria.album_max {
            continue;
        }

        let member_count = artist.members.len();
        if criteria.members_min > 0 && member_count < criteria.members_min {
            continue;
        }
        if criteria.members_max > 0 && member_count > criteria.members_max {
            continue;
        }

        filtered.push(FullArtist::from_artist(artist.clone()));
    }

    if criteria.locations.is_empty() {
        return filtered;
    }

    filtered
        .into_iter()
        .filter_map(|partial| catalog.full_artist(partial.artist.id).ok())
        .filter(|full| {
            criteria
                .locations
                .iter()
                .any(|wanted| text::any_location_contains(&full.locations_list, wanted))
        })
        .collect()
}
