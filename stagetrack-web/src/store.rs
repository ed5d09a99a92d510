//! In-memory catalog of the four remote collections
//!
//! The store owns one `RwLock<Catalog>`. Fetch tasks take the write lock to
//! replace a single collection; queries take the read lock once and hold it
//! for the whole logical query, so no query observes a collection
//! mid-replace and concurrent queries never block each other.
//!
//! Location, date, and relation records are indexed by their own `id` field
//! at replace time. A record missing from the remote payload (or delivered
//! out of order) joins as empty data instead of being attributed to the
//! wrong artist. Cross-collection agreement is not enforced here.

use std::collections::HashMap;

use tokio::sync::{RwLock, RwLockReadGuard};

use stagetrack_common::dates::extract_year;
use stagetrack_common::models::{Artist, DateRecord, FullArtist, LocationRecord, RelationRecord};
use stagetrack_common::{Error, Result};

/// One consistent view of the four collections
#[derive(Debug, Default)]
pub struct Catalog {
    artists: Vec<Artist>,
    locations: HashMap<u32, LocationRecord>,
    dates: HashMap<u32, DateRecord>,
    relations: HashMap<u32, RelationRecord>,
}

impl Catalog {
    /// Build a catalog from the four collections in one step. The running
    /// service populates the store through `Store::replace_*` instead.
    pub fn from_collections(
        artists: Vec<Artist>,
        locations: Vec<LocationRecord>,
        dates: Vec<DateRecord>,
        relations: Vec<RelationRecord>,
    ) -> Self {
        Self {
            artists,
            locations: index_by_id(locations, |r| r.id),
            dates: index_by_id(dates, |r| r.id),
            relations: index_by_id(relations, |r| r.id),
        }
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// Linear scan: remote ids are externally assigned and not assumed
    /// sorted or contiguous.
    pub fn artist_by_id(&self, id: u32) -> Option<&Artist> {
        self.artists.iter().find(|artist| artist.id == id)
    }

    /// Join an artist with its location, date, and relation records.
    ///
    /// Only an unknown artist id fails. An id absent from an auxiliary
    /// index yields empty data for that field; the catalog degrades to
    /// partial records rather than erroring when the remote collections
    /// disagree on coverage.
    pub fn full_artist(&self, id: u32) -> Result<FullArtist> {
        let artist = self.artist_by_id(id).ok_or(Error::NotFound(id))?.clone();

        let locations_list = self
            .locations
            .get(&id)
            .map(|record| record.locations.clone())
            .unwrap_or_default();
        let dates_list = self
            .dates
            .get(&id)
            .map(|record| record.dates.clone())
            .unwrap_or_default();
        let dates_locations = self
            .relations
            .get(&id)
            .map(|record| record.dates_locations.clone())
            .unwrap_or_default();

        let first_album_year = extract_year(&artist.first_album);

        Ok(FullArtist {
            artist,
            locations_list,
            dates_list,
            dates_locations,
            first_album_year,
        })
    }

    /// All relation records, in index order (unspecified).
    pub fn relations(&self) -> impl Iterator<Item = &RelationRecord> {
        self.relations.values()
    }
}

/// Process-wide catalog holder, injected into handlers via `AppState`
#[derive(Debug, Default)]
pub struct Store {
    inner: RwLock<Catalog>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// One read guard per logical query.
    pub async fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read().await
    }

    /// Overwrite the artists collection entirely.
    pub async fn replace_artists(&self, artists: Vec<Artist>) {
        self.inner.write().await.artists = artists;
    }

    /// Overwrite the locations collection entirely, re-indexing by id.
    pub async fn replace_locations(&self, records: Vec<LocationRecord>) {
        self.inner.write().await.locations = index_by_id(records, |r| r.id);
    }

    /// Overwrite the dates collection entirely, re-indexing by id.
    pub async fn replace_dates(&self, records: Vec<DateRecord>) {
        self.inner.write().await.dates = index_by_id(records, |r| r.id);
    }

    /// Overwrite the relations collection entirely, re-indexing by id.
    pub async fn replace_relations(&self, records: Vec<RelationRecord>) {
        self.inner.write().await.relations = index_by_id(records, |r| r.id);
    }

    /// Read-only snapshot of the artists collection.
    pub async fn all_artists(&self) -> Vec<Artist> {
        self.inner.read().await.artists.clone()
    }

    pub async fn artist_by_id(&self, id: u32) -> Option<Artist> {
        self.inner.read().await.artist_by_id(id).cloned()
    }

    pub async fn full_by_id(&self, id: u32) -> Result<FullArtist> {
        self.inner.read().await.full_artist(id)
    }
}

fn index_by_id<T>(records: Vec<T>, id: impl Fn(&T) -> u32) -> HashMap<u32, T> {
    records.into_iter().map(|record| (id(&record), record)).collect()
}
