//! Range discovery over the artist collection
//!
//! Filter clients need the real value ranges before they can offer sliders;
//! these helpers scan the collection and report observed bounds.

use std::collections::HashSet;

use stagetrack_common::dates::extract_year;
use stagetrack_common::models::{Artist, RelationRecord};
use stagetrack_common::text;

/// Observed (creation min, creation max, first-album min, first-album max).
///
/// All zero for an empty input. Album bounds are seeded from the first
/// artist and afterwards only moved by parseable (nonzero) years, so a
/// collection of unparseable dates reports 0 album bounds.
pub fn year_range(artists: &[Artist]) -> (i32, i32, i32, i32) {
    let Some(first) = artists.first() else {
        return (0, 0, 0, 0);
    };

    let mut creation_min = first.creation_date;
    let mut creation_max = first.creation_date;
    let mut album_min = extract_year(&first.first_album);
    let mut album_max = album_min;

    for artist in artists {
        creation_min = creation_min.min(artist.creation_date);
        creation_max = creation_max.max(artist.creation_date);

        let year = extract_year(&artist.first_album);
        if year > 0 {
            if year < album_min {
                album_min = year;
            }
            if year > album_max {
                album_max = year;
            }
        }
    }

    (creation_min, creation_max, album_min, album_max)
}

/// Observed (min, max) member counts; (0, 0) for an empty input.
pub fn member_count_range(artists: &[Artist]) -> (usize, usize) {
    let Some(first) = artists.first() else {
        return (0, 0);
    };

    let mut min = first.members.len();
    let mut max = min;

    for artist in artists {
        let count = artist.members.len();
        min = min.min(count);
        max = max.max(count);
    }

    (min, max)
}

/// Every venue name across the relation records, deduplicated by normalized
/// form with the original spelling kept. Sorted for a stable response.
pub fn unique_locations<'a>(relations: impl Iterator<Item = &'a RelationRecord>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut locations = Vec::new();

    for relation in relations {
        for location in relation.dates_locations.keys() {
            if seen.insert(text::normalize(location)) {
                locations.push(location.clone());
            }
        }
    }

    locations.sort();
    locations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(creation: i32, first_album: &str, members: usize) -> Artist {
        Artist {
            id: 1,
            image: String::new(),
            name: String::new(),
            members: (0..members).map(|i| format!("Member {i}")).collect(),
            creation_date: creation,
            first_album: first_album.to_string(),
            locations: String::new(),
            concert_dates: String::new(),
            relations: String::new(),
        }
    }

    #[test]
    fn test_year_range() {
        let artists = vec![
            artist(1970, "14-12-1973", 4),
            artist(1965, "05-08-1967", 3),
            artist(1980, "10-03-1982", 2),
        ];

        assert_eq!(year_range(&artists), (1965, 1980, 1967, 1982));
    }

    #[test]
    fn test_year_range_empty_input() {
        assert_eq!(year_range(&[]), (0, 0, 0, 0));
    }

    #[test]
    fn test_year_range_skips_unparseable_album_dates() {
        let artists = vec![artist(1970, "14-12-1973", 4), artist(1965, "unknown", 3)];

        let (_, _, album_min, album_max) = year_range(&artists);
        assert_eq!((album_min, album_max), (1973, 1973));
    }

    #[test]
    fn test_member_count_range() {
        let artists = vec![artist(1970, "", 2), artist(1971, "", 4), artist(1972, "", 1)];
        assert_eq!(member_count_range(&artists), (1, 4));
    }

    #[test]
    fn test_member_count_range_empty_input() {
        assert_eq!(member_count_range(&[]), (0, 0));
    }

    #[test]
    fn test_unique_locations_dedup_by_normalized_form() {
        let relations = vec![
            RelationRecord {
                id: 1,
                dates_locations: [
                    ("new_york-usa".to_string(), vec![]),
                    ("london-uk".to_string(), vec![]),
                ]
                .into_iter()
                .collect(),
            },
            RelationRecord {
                id: 2,
                // Same venue, different separator style: deduplicated.
                dates_locations: [("new-york-usa".to_string(), Vec::<String>::new())]
                    .into_iter()
                    .collect(),
            },
        ];

        let locations = unique_locations(relations.iter());
        assert_eq!(locations.len(), 2);
        assert!(locations.contains(&"london-uk".to_string()));
    }
}
