//! HTTP API handlers for stagetrack-web

pub mod artists;
pub mod buildinfo;
pub mod filter;
pub mod health;
pub mod search;

pub use artists::{get_artist, get_ranges, list_artists};
pub use buildinfo::get_build_info;
pub use filter::filter_artists;
pub use health::health_routes;
pub use search::{get_suggestions, search_artists};
