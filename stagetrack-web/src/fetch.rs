//! Remote catalog fetch
//!
//! Pulls the four collections concurrently and writes each into the store
//! as it lands. The four fetches are joined by a barrier: the call returns
//! only after every fetch completes, reporting the first failure. Slower
//! fetches are not cancelled when one fails, and collections that succeeded
//! stay written; callers must treat the catalog as unreliable whenever an
//! error is returned.
//!
//! The same call replaces all four collections on a re-fetch without
//! changing the read contract.

use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use stagetrack_common::models::{Artist, DateIndex, LocationIndex, RelationIndex};

use crate::store::Store;

/// Request timeout applied to every collection fetch
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("stagetrack/", env!("CARGO_PKG_VERSION"));

/// The four remote collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Artists,
    Locations,
    Dates,
    Relations,
}

impl Source {
    pub fn name(self) -> &'static str {
        match self {
            Source::Artists => "artists",
            Source::Locations => "locations",
            Source::Dates => "dates",
            Source::Relations => "relations",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::error::Error for Source {}

/// Fetch errors, tagged with the collection that failed
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request never produced a response (includes timeouts)
    #[error("{source}: network error: {cause}")]
    Network { source: Source, cause: String },

    /// Response arrived with a non-success status
    #[error("{source}: unexpected status {status}")]
    Status { source: Source, status: u16 },

    /// Response body was not the expected JSON shape
    #[error("{source}: decode error: {cause}")]
    Decode { source: Source, cause: String },
}

impl FetchError {
    /// The collection this error came from.
    pub fn source_collection(&self) -> Source {
        match self {
            FetchError::Network { source, .. }
            | FetchError::Status { source, .. }
            | FetchError::Decode { source, .. } => *source,
        }
    }
}

/// Endpoint URLs for the four collections
#[derive(Debug, Clone)]
pub struct Sources {
    pub artists: String,
    pub locations: String,
    pub dates: String,
    pub relations: String,
}

impl Sources {
    /// Derive the four endpoints from one API base URL.
    ///
    /// The relations endpoint is singular (`/relation`) on the remote API.
    pub fn from_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            artists: format!("{base}/artists"),
            locations: format!("{base}/locations"),
            dates: format!("{base}/dates"),
            relations: format!("{base}/relation"),
        }
    }
}

/// Build the HTTP client used for catalog fetches.
pub fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Fetch all four collections concurrently and populate the store.
///
/// Returns after every fetch has completed; the first error in collection
/// order (artists, locations, dates, relations) is reported.
pub async fn fetch_all(
    client: &reqwest::Client,
    sources: &Sources,
    store: &Store,
) -> Result<(), FetchError> {
    let (artists, locations, dates, relations) = tokio::join!(
        fetch_artists(client, &sources.artists, store),
        fetch_locations(client, &sources.locations, store),
        fetch_dates(client, &sources.dates, store),
        fetch_relations(client, &sources.relations, store),
    );

    for result in [artists, locations, dates, relations] {
        result?;
    }

    Ok(())
}

async fn fetch_artists(
    client: &reqwest::Client,
    url: &str,
    store: &Store,
) -> Result<(), FetchError> {
    let artists: Vec<Artist> = fetch_json(client, Source::Artists, url).await?;
    info!(count = artists.len(), "artists collection fetched");
    store.replace_artists(artists).await;
    Ok(())
}

async fn fetch_locations(
    client: &reqwest::Client,
    url: &str,
    store: &Store,
) -> Result<(), FetchError> {
    let index: LocationIndex = fetch_json(client, Source::Locations, url).await?;
    info!(count = index.index.len(), "locations collection fetched");
    store.replace_locations(index.index).await;
    Ok(())
}

async fn fetch_dates(client: &reqwest::Client, url: &str, store: &Store) -> Result<(), FetchError> {
    let index: DateIndex = fetch_json(client, Source::Dates, url).await?;
    info!(count = index.index.len(), "dates collection fetched");
    store.replace_dates(index.index).await;
    Ok(())
}

async fn fetch_relations(
    client: &reqwest::Client,
    url: &str,
    store: &Store,
) -> Result<(), FetchError> {
    let index: RelationIndex = fetch_json(client, Source::Relations, url).await?;
    info!(count = index.index.len(), "relations collection fetched");
    store.replace_relations(index.index).await;
    Ok(())
}

async fn fetch_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    source: Source,
    url: &str,
) -> Result<T, FetchError> {
    debug!(%source, url, "fetching collection");

    let response = client.get(url).send().await.map_err(|e| FetchError::Network {
        source,
        cause: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            source,
            status: status.as_u16(),
        });
    }

    response.json().await.map_err(|e| FetchError::Decode {
        source,
        cause: e.to_string(),
    })
}
