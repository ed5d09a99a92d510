//! stagetrack-web library - concert catalog aggregation service
//!
//! Fetches four related collections (artists, locations, dates, relations)
//! from the remote catalog API at startup, joins them by record id in an
//! in-memory store, and serves filtered/searched views as JSON.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod fetch;
pub mod filter;
pub mod ranges;
pub mod search;
pub mod store;

use store::Store;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// In-memory catalog of the four remote collections
    pub store: Arc<Store>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/api/artists", get(api::list_artists))
        .route("/api/artists/:id", get(api::get_artist))
        .route("/api/ranges", get(api::get_ranges))
        .route("/api/search", get(api::search_artists))
        .route("/api/suggestions", get(api::get_suggestions))
        .route("/api/filter", get(api::filter_artists))
        .route("/build_info", get(api::get_build_info))
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
