//! Data model for the remote concert catalog
//!
//! The remote source exposes four collections over JSON: artists, concert
//! locations, concert dates, and artist-to-location/date relations. Artists
//! arrive as a bare array; the other three arrive wrapped in an `index`
//! object. Each record carries its own `id`, which is the join key across
//! collections.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::dates::extract_year;

/// A band or solo artist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    /// Externally assigned, unique across the artists collection
    pub id: u32,
    pub image: String,
    pub name: String,
    pub members: Vec<String>,
    #[serde(rename = "creationDate")]
    pub creation_date: i32,
    /// First album release date, `DD-MM-YYYY`
    #[serde(rename = "firstAlbum")]
    pub first_album: String,
    /// Self-link to this artist's locations resource (carried, never followed)
    pub locations: String,
    #[serde(rename = "concertDates")]
    pub concert_dates: String,
    pub relations: String,
}

/// Concert locations for one artist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: u32,
    pub locations: Vec<String>,
    /// Self-link to the dates resource (carried, never followed)
    pub dates: String,
}

/// Wire wrapper for the locations collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationIndex {
    pub index: Vec<LocationRecord>,
}

/// Concert dates for one artist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRecord {
    pub id: u32,
    pub dates: Vec<String>,
}

/// Wire wrapper for the dates collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateIndex {
    pub index: Vec<DateRecord>,
}

/// Venue-to-dates mapping for one artist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationRecord {
    pub id: u32,
    #[serde(rename = "datesLocations")]
    pub dates_locations: HashMap<String, Vec<String>>,
}

/// Wire wrapper for the relations collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationIndex {
    pub index: Vec<RelationRecord>,
}

/// An artist joined with its location, date, and relation data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullArtist {
    #[serde(flatten)]
    pub artist: Artist,
    pub locations_list: Vec<String>,
    pub dates_list: Vec<String>,
    pub dates_locations: HashMap<String, Vec<String>>,
    /// Year parsed from `first_album`; 0 when the date string is unparseable
    pub first_album_year: i32,
}

impl FullArtist {
    /// Wrap a bare artist: derived first-album year attached, join fields
    /// left empty. Used wherever the joined data is not needed yet.
    pub fn from_artist(artist: Artist) -> Self {
        let first_album_year = extract_year(&artist.first_album);
        Self {
            artist,
            locations_list: Vec::new(),
            dates_list: Vec::new(),
            dates_locations: HashMap::new(),
            first_album_year,
        }
    }
}

/// Filter bounds over the artist collection.
///
/// A bound of 0 means "no constraint", which makes a literal bound of 0
/// inexpressible. Real ranges are discovered separately, so no observed
/// value ever needs a 0 bound.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub creation_min: i32,
    pub creation_max: i32,
    pub album_min: i32,
    pub album_max: i32,
    pub members_min: usize,
    pub members_max: usize,
    /// Venue names to match against joined locations; empty disables the
    /// venue sub-filter
    pub locations: Vec<String>,
}

/// Category of an autocomplete suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestionKind {
    #[serde(rename = "artist/band")]
    Artist,
    #[serde(rename = "member")]
    Member,
    #[serde(rename = "creation date")]
    CreationDate,
    #[serde(rename = "first album date")]
    FirstAlbum,
}

/// One autocomplete suggestion, attributed to the artist it came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSuggestion {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub id: u32,
}
