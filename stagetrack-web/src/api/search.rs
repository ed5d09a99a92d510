//! Search and autocomplete endpoints

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use stagetrack_common::models::{FullArtist, SearchSuggestion};

use crate::{search, AppState};

/// Query parameters shared by the search endpoints
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text query; blank yields an empty result set
    #[serde(default)]
    pub q: String,
}

/// GET /api/search?q=
pub async fn search_artists(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<FullArtist>> {
    let catalog = state.store.read().await;
    Json(search::search_full(&catalog, &params.q))
}

/// GET /api/suggestions?q=
pub async fn get_suggestions(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<SearchSuggestion>> {
    let catalog = state.store.read().await;
    Json(search::suggestions(catalog.artists(), &params.q))
}
