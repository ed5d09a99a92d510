//! Filter endpoint

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use stagetrack_common::models::{FilterCriteria, FullArtist};

use crate::{filter, AppState};

/// Query parameters for GET /api/filter
///
/// Bounds left out (or sent as 0) mean "no constraint". `locations` is a
/// comma-separated list of venue names.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub creation_min: i32,
    #[serde(default)]
    pub creation_max: i32,
    #[serde(default)]
    pub album_min: i32,
    #[serde(default)]
    pub album_max: i32,
    #[serde(default)]
    pub members_min: usize,
    #[serde(default)]
    pub members_max: usize,
    pub locations: Option<String>,
}

impl FilterParams {
    fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            creation_min: self.creation_min,
            creation_max: self.creation_max,
            album_min: self.album_min,
            album_max: self.album_max,
            members_min: self.members_min,
            members_max: self.members_max,
            locations: self
                .locations
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|venue| !venue.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// GET /api/filter
pub async fn filter_artists(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Json<Vec<FullArtist>> {
    let criteria = params.into_criteria();
    let catalog = state.store.read().await;
    Json(filter::filter_artists(&catalog, &criteria))
}
