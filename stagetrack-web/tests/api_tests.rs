//! Integration tests for the stagetrack-web API endpoints
//!
//! Exercises the router over a seeded in-memory store: listing, joined
//! detail, not-found mapping, search, suggestions, filtering, and range
//! discovery. No network access.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot` method

use stagetrack_common::models::{Artist, DateRecord, LocationRecord, RelationRecord};
use stagetrack_web::store::Store;
use stagetrack_web::{build_router, AppState};

fn artist(id: u32, name: &str, members: &[&str], creation: i32, first_album: &str) -> Artist {
    Artist {
        id,
        image: format!("https://example.com/{id}.jpeg"),
        name: name.to_string(),
        members: members.iter().map(|m| m.to_string()).collect(),
        creation_date: creation,
        first_album: first_album.to_string(),
        locations: String::new(),
        concert_dates: String::new(),
        relations: String::new(),
    }
}

/// Test helper: seed a store with two artists and their joined records
async fn setup_store() -> Arc<Store> {
    let store = Arc::new(Store::new());

    store
        .replace_artists(vec![
            artist(
                1,
                "Queen",
                &["Freddie Mercury", "Brian May", "John Deacon", "Roger Taylor"],
                1970,
                "14-12-1973",
            ),
            artist(
                2,
                "Pink Floyd",
                &["Roger Waters", "David Gilmour", "Nick Mason"],
                1965,
                "05-08-1967",
            ),
        ])
        .await;

    store
        .replace_locations(vec![
            LocationRecord {
                id: 1,
                locations: vec!["london-uk".to_string(), "osaka-japan".to_string()],
                dates: String::new(),
            },
            LocationRecord {
                id: 2,
                locations: vec!["berlin-germany".to_string()],
                dates: String::new(),
            },
        ])
        .await;

    store
        .replace_dates(vec![
            DateRecord {
                id: 1,
                dates: vec!["10-07-2019".to_string()],
            },
            DateRecord {
                id: 2,
                dates: vec!["23-08-2019".to_string()],
            },
        ])
        .await;

    store
        .replace_relations(vec![
            RelationRecord {
                id: 1,
                dates_locations: [("london-uk".to_string(), vec!["10-07-2019".to_string()])]
                    .into_iter()
                    .collect(),
            },
            RelationRecord {
                id: 2,
                dates_locations: [("berlin-germany".to_string(), vec!["23-08-2019".to_string()])]
                    .into_iter()
                    .collect(),
            },
        ])
        .await;

    store
}

/// Test helper: build the app over a seeded store
async fn setup_app() -> axum::Router {
    build_router(AppState::new(setup_store().await))
}

/// Test helper: create a GET request
fn test_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: extract JSON body from a response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app().await;

    let response = app.oneshot(test_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "stagetrack-web");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_list_artists_carries_derived_year_without_join_fields() {
    let app = setup_app().await;

    let response = app.oneshot(test_request("/api/artists")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let artists = body.as_array().unwrap();
    assert_eq!(artists.len(), 2);

    assert_eq!(artists[0]["name"], "Queen");
    assert_eq!(artists[0]["first_album_year"], 1973);
    assert_eq!(artists[0]["locations_list"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_artist_detail_is_fully_joined() {
    let app = setup_app().await;

    let response = app.oneshot(test_request("/api/artists/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["name"], "Queen");
    assert_eq!(body["first_album_year"], 1973);
    assert_eq!(
        body["locations_list"],
        serde_json::json!(["london-uk", "osaka-japan"])
    );
    assert_eq!(body["dates_list"], serde_json::json!(["10-07-2019"]));
    assert_eq!(
        body["dates_locations"]["london-uk"],
        serde_json::json!(["10-07-2019"])
    );
}

#[tokio::test]
async fn test_unknown_artist_maps_to_404() {
    let app = setup_app().await;

    let response = app.oneshot(test_request("/api/artists/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("99"));
}

#[tokio::test]
async fn test_search_matches_member_and_returns_joined_records() {
    let app = setup_app().await;

    let response = app
        .oneshot(test_request("/api/search?q=freddie"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Queen");
    assert_eq!(results[0]["locations_list"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_matches_joined_venue_names() {
    let app = setup_app().await;

    let response = app
        .oneshot(test_request("/api/search?q=osaka"))
        .await
        .unwrap();

    let body = extract_json(response.into_body()).await;
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Queen");
}

#[tokio::test]
async fn test_search_blank_query_yields_empty_result() {
    let app = setup_app().await;

    let response = app.oneshot(test_request("/api/search?q=")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_filter_by_creation_window() {
    let app = setup_app().await;

    let response = app
        .oneshot(test_request("/api/filter?creation_min=1968&creation_max=1975"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Queen");
}

#[tokio::test]
async fn test_filter_by_venue_returns_joined_records() {
    let app = setup_app().await;

    let response = app
        .oneshot(test_request("/api/filter?locations=berlin"))
        .await
        .unwrap();

    let body = extract_json(response.into_body()).await;
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Pink Floyd");
    assert_eq!(
        results[0]["locations_list"],
        serde_json::json!(["berlin-germany"])
    );
}

#[tokio::test]
async fn test_suggestions_endpoint_tags_categories() {
    let app = setup_app().await;

    let response = app
        .oneshot(test_request("/api/suggestions?q=freddie"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let suggestions = body.as_array().unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0]["type"], "member");
    assert_eq!(suggestions[0]["value"], "Freddie Mercury");
    assert_eq!(suggestions[0]["id"], 1);
}

#[tokio::test]
async fn test_ranges_endpoint_reports_observed_bounds() {
    let app = setup_app().await;

    let response = app.oneshot(test_request("/api/ranges")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["creation_min"], 1965);
    assert_eq!(body["creation_max"], 1970);
    assert_eq!(body["album_min"], 1967);
    assert_eq!(body["album_max"], 1973);
    assert_eq!(body["members_min"], 3);
    assert_eq!(body["members_max"], 4);

    let locations = body["locations"].as_array().unwrap();
    assert!(locations.contains(&Value::String("london-uk".to_string())));
    assert!(locations.contains(&Value::String("berlin-germany".to_string())));
}
