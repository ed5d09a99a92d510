//! Artist listing, detail, and range-discovery endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use stagetrack_common::models::FullArtist;
use stagetrack_common::Error;

use crate::ranges;
use crate::AppState;

/// GET /api/artists
///
/// Every artist with its derived first-album year. Join fields stay empty
/// at list level; the detail endpoint carries the joined data.
pub async fn list_artists(State(state): State<AppState>) -> Json<Vec<FullArtist>> {
    let catalog = state.store.read().await;
    let artists = catalog
        .artists()
        .iter()
        .cloned()
        .map(FullArtist::from_artist)
        .collect();
    Json(artists)
}

/// GET /api/artists/:id
///
/// Fully joined artist record; unknown ids map to a 404 JSON body.
pub async fn get_artist(State(state): State<AppState>, Path(id): Path<u32>) -> Response {
    let catalog = state.store.read().await;
    match catalog.full_artist(id) {
        Ok(full) => Json(full).into_response(),
        Err(Error::NotFound(id)) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("artist {id} not found") })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// Observed value ranges, for filter clients
#[derive(Debug, Serialize)]
pub struct RangesResponse {
    pub creation_min: i32,
    pub creation_max: i32,
    pub album_min: i32,
    pub album_max: i32,
    pub members_min: usize,
    pub members_max: usize,
    /// Every known venue name, deduplicated and sorted
    pub locations: Vec<String>,
}

/// GET /api/ranges
pub async fn get_ranges(State(state): State<AppState>) -> Json<RangesResponse> {
    let catalog = state.store.read().await;

    let (creation_min, creation_max, album_min, album_max) = ranges::year_range(catalog.artists());
    let (members_min, members_max) = ranges::member_count_range(catalog.artists());

    Json(RangesResponse {
        creation_min,
        creation_max,
        album_min,
        album_max,
        members_min,
        members_max,
        locations: ranges::unique_locations(catalog.relations()),
    })
}
