//! Substring search over the catalog
//!
//! Full search and autocomplete suggestions share one matching rule:
//! case-insensitive containment of the query in the candidate text, with
//! integer fields compared through their decimal form. A blank query never
//! matches anything.

use std::collections::HashSet;

use stagetrack_common::models::{Artist, FullArtist, SearchSuggestion, SuggestionKind};
use stagetrack_common::text;

use crate::store::Catalog;

/// Suggestion responses are capped after the whole collection is scanned.
const MAX_SUGGESTIONS: usize = 10;

/// Search every artist across name, members, creation year, first-album
/// date, and joined venue names. Matches come back fully joined.
pub fn search_full(catalog: &Catalog, query: &str) -> Vec<FullArtist> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();
    for artist in catalog.artists() {
        let Ok(full) = catalog.full_artist(artist.id) else {
            continue;
        };

        let matched = artist.name.to_lowercase().contains(&query)
            || artist.members.iter().any(|member| member.to_lowercase().contains(&query))
            || artist.creation_date.to_string().contains(&query)
            || artist.first_album.to_lowercase().contains(&query)
            || text::any_location_contains(&full.locations_list, &query);

        if matched {
            results.push(full);
        }
    }

    results
}

/// Autocomplete suggestions across name, members, creation year, and
/// first-album date. Venues are deliberately excluded to keep this path
/// cheap enough for search-as-you-type.
///
/// Duplicate (kind, value) pairs are suppressed; the artist encountered
/// first in collection order keeps the attribution. The cap is applied by
/// truncation after the whole scan, not by early exit.
pub fn suggestions(artists: &[Artist], query: &str) -> Vec<SearchSuggestion> {
    let query = query.trim().to_lowercase();

    let mut found = Vec::new();
    if query.is_empty() {
        return found;
    }

    let mut seen: HashSet<(SuggestionKind, String)> = HashSet::new();

    for artist in artists {
        if artist.name.to_lowercase().contains(&query) {
            push_unique(&mut found, &mut seen, SuggestionKind::Artist, &artist.name, artist.id);
        }

        for member in &artist.members {
            if member.to_lowercase().contains(&query) {
                push_unique(&mut found, &mut seen, SuggestionKind::Member, member, artist.id);
            }
        }

        let creation = artist.creation_date.to_string();
        if creation.contains(&query) {
            push_unique(
                &mut found,
                &mut seen,
                SuggestionKind::CreationDate,
                &creation,
                artist.id,
            );
        }

        if artist.first_album.to_lowercase().contains(&query) {
            push_unique(
                &mut found,
                &mut seen,
                SuggestionKind::FirstAlbum,
                &artist.first_album,
                artist.id,
            );
        }
    }

    found.truncate(MAX_SUGGESTIONS);
    found
}

fn push_unique(
    found: &mut Vec<SearchSuggestion>,
    seen: &mut HashSet<(SuggestionKind, String)>,
    kind: SuggestionKind,
    value: &str,
    id: u32,
) {
    if seen.insert((kind, value.to_string())) {
        found.push(SearchSuggestion {
            value: value.to_string(),
            kind,
            id,
        });
    }
}
