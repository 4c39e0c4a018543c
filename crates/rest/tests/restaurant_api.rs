//! Restaurant API integration tests.
//!
//! Drives every route through an in-memory SQLite store:
//! - list / read / create / update / delete status codes and bodies
//! - projection shape and current grade derivation
//! - partial update merge semantics
//! - concurrent creates

mod common;

use std::collections::HashSet;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use restaurants_persistence::core::RestaurantStorage;
use serde_json::{Value, json};
use tower::ServiceExt;

use common::fixtures;
use common::harness::RestTestHarness;

fn sorted_keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .expect("projected restaurant is an object")
        .keys()
        .cloned()
        .collect();
    keys.sort();
    keys
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_list_empty_store() {
    let harness = RestTestHarness::new();

    let response = harness.server.get("/restaurants").await;
    response.assert_status_ok();
    response.assert_json(&json!({"restaurants": []}));
}

#[tokio::test]
async fn test_list_length_matches_store_count() {
    let harness = RestTestHarness::new();
    harness.create(&fixtures::morris_park_bake_shop()).await;
    harness.create(&fixtures::wendys()).await;
    harness.create(&fixtures::riviera_caterer()).await;

    let restaurants = harness.list().await;
    assert_eq!(restaurants.len() as u64, harness.count().await);
    assert_eq!(restaurants.len(), 3);

    let names: Vec<&str> = restaurants
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Morris Park Bake Shop", "Wendy'S", "Riviera Caterer"]);
}

#[tokio::test]
async fn test_every_projection_has_exactly_six_keys() {
    let harness = RestTestHarness::new();
    harness.create(&fixtures::morris_park_bake_shop()).await;
    harness.create(&fixtures::riviera_caterer()).await;
    harness.create(&fixtures::minimal("Bare")).await;

    for restaurant in harness.list().await {
        assert_eq!(
            sorted_keys(&restaurant),
            ["address", "borough", "cuisine", "grade", "id", "name"]
        );
        assert!(restaurant.get("grades").is_none());
    }
}

// =============================================================================
// Read
// =============================================================================

#[tokio::test]
async fn test_read_existing() {
    let harness = RestTestHarness::new();
    let id = harness.create(&fixtures::morris_park_bake_shop()).await;

    let response = harness.server.get(&format!("/restaurants/{}", id)).await;
    response.assert_status_ok();
    assert!(response.headers().contains_key(header::LAST_MODIFIED));

    response.assert_json(&json!({
        "id": id,
        "name": "Morris Park Bake Shop",
        "cuisine": "Bakery",
        "borough": "Bronx",
        "grade": "A",
        "address": {
            "building": "1007",
            "street": "Morris Park Ave",
            "zipcode": "10462"
        }
    }));
}

#[tokio::test]
async fn test_read_unknown_id_is_404() {
    let harness = RestTestHarness::new();

    let response = harness.server.get("/restaurants/no-such-id").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["code"], "not-found");
    assert!(body["message"].as_str().unwrap().contains("no-such-id"));
}

#[tokio::test]
async fn test_current_grade_is_latest_by_date() {
    let harness = RestTestHarness::new();
    // d2 > d3 > d1: the middle entry is newest
    let id = harness.create(&fixtures::wendys()).await;

    let restaurant = harness.get(&id).await;
    assert_eq!(restaurant["grade"], "B");
}

#[tokio::test]
async fn test_no_grades_projects_null() {
    let harness = RestTestHarness::new();
    let id = harness.create(&fixtures::riviera_caterer()).await;

    let restaurant = harness.get(&id).await;
    assert!(restaurant["grade"].is_null());
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_returns_201_with_projection_and_location() {
    let harness = RestTestHarness::new();

    let response = harness
        .server
        .post("/restaurants")
        .json(&fixtures::wendys())
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    let id = body["id"].as_str().expect("id is a string");
    assert!(!id.is_empty());
    assert_eq!(body["grade"], "B");
    assert_eq!(
        sorted_keys(&body),
        ["address", "borough", "cuisine", "grade", "id", "name"]
    );

    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap();
    assert_eq!(location, format!("http://localhost:0/restaurants/{}", id));
}

#[tokio::test]
async fn test_created_restaurant_appears_once_in_list() {
    let harness = RestTestHarness::new();
    harness.create(&fixtures::riviera_caterer()).await;
    let id = harness.create(&fixtures::morris_park_bake_shop()).await;

    let matches = harness
        .list()
        .await
        .into_iter()
        .filter(|r| r["id"] == id.as_str())
        .count();
    assert_eq!(matches, 1);
}

#[tokio::test]
async fn test_create_ignores_payload_id() {
    let harness = RestTestHarness::new();

    let mut payload = fixtures::minimal("Chosen Id");
    payload["id"] = json!("my-own-id");
    let id = harness.create(&payload).await;

    assert_ne!(id, "my-own-id");
    harness
        .server
        .get("/restaurants/my-own-id")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_defaults_optional_fields() {
    let harness = RestTestHarness::new();
    let id = harness.create(&fixtures::minimal("Bare")).await;

    let restaurant = harness.get(&id).await;
    assert!(restaurant["grade"].is_null());
    assert_eq!(
        restaurant["address"],
        json!({"building": "", "street": "", "zipcode": ""})
    );
}

#[tokio::test]
async fn test_create_accepts_unknown_borough() {
    let harness = RestTestHarness::new();

    let mut payload = fixtures::minimal("Across The River");
    payload["borough"] = json!("Hoboken");
    let id = harness.create(&payload).await;

    assert_eq!(harness.get(&id).await["borough"], "Hoboken");
}

#[tokio::test]
async fn test_create_missing_required_field_is_400() {
    let harness = RestTestHarness::new();

    let response = harness
        .server
        .post("/restaurants")
        .json(&json!({"name": "No Borough", "cuisine": "Thai"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["code"], "invalid");
    assert!(body["message"].as_str().unwrap().contains("borough"));
    assert_eq!(harness.count().await, 0);
}

#[tokio::test]
async fn test_create_mistyped_field_is_400() {
    let harness = RestTestHarness::new();

    let response = harness
        .server
        .post("/restaurants")
        .json(&json!({"name": 7, "cuisine": "Thai", "borough": "Queens"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(harness.count().await, 0);
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_partial_merge() {
    let harness = RestTestHarness::new();
    let id = harness.create(&fixtures::morris_park_bake_shop()).await;

    let response = harness
        .server
        .put(&format!("/restaurants/{}", id))
        .json(&json!({"name": "Morris Park Bakery", "cuisine": "Cafe"}))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.as_bytes().is_empty());

    let restaurant = harness.get(&id).await;
    assert_eq!(restaurant["name"], "Morris Park Bakery");
    assert_eq!(restaurant["cuisine"], "Cafe");
    assert_eq!(restaurant["borough"], "Bronx");
    assert_eq!(restaurant["address"]["street"], "Morris Park Ave");

    // The grade history is not projected; check it in the store
    let stored = harness.backend.read(&id).await.unwrap().unwrap();
    assert_eq!(stored.restaurant().grades.len(), 3);
}

#[tokio::test]
async fn test_update_with_matching_body_id() {
    let harness = RestTestHarness::new();
    let id = harness.create(&fixtures::wendys()).await;

    harness
        .server
        .put(&format!("/restaurants/{}", id))
        .json(&json!({"id": id, "borough": "Manhattan"}))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(harness.get(&id).await["borough"], "Manhattan");
}

#[tokio::test]
async fn test_update_id_mismatch_is_400_and_leaves_document() {
    let harness = RestTestHarness::new();
    let id = harness.create(&fixtures::wendys()).await;

    let response = harness
        .server
        .put(&format!("/restaurants/{}", id))
        .json(&json!({"id": "someone-else", "name": "Hijacked"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("someone-else"));
    assert!(message.contains(&id));

    assert_eq!(harness.get(&id).await["name"], "Wendy'S");
}

#[tokio::test]
async fn test_update_replaces_grades_and_changes_current_grade() {
    let harness = RestTestHarness::new();
    let id = harness.create(&fixtures::morris_park_bake_shop()).await;

    harness
        .server
        .put(&format!("/restaurants/{}", id))
        .json(&json!({"grades": [
            {"date": "2015-02-01T00:00:00Z", "grade": "C"},
            {"date": "2014-11-01T00:00:00Z", "grade": "A"}
        ]}))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(harness.get(&id).await["grade"], "C");
}

#[tokio::test]
async fn test_update_null_field_is_ignored() {
    let harness = RestTestHarness::new();
    let id = harness.create(&fixtures::wendys()).await;

    harness
        .server
        .put(&format!("/restaurants/{}", id))
        .json(&json!({"name": null, "cuisine": "Burgers", "owner": "unknown key"}))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let restaurant = harness.get(&id).await;
    assert_eq!(restaurant["name"], "Wendy'S");
    assert_eq!(restaurant["cuisine"], "Burgers");
}

#[tokio::test]
async fn test_empty_update_is_204() {
    let harness = RestTestHarness::new();
    let id = harness.create(&fixtures::wendys()).await;
    let before = harness.get(&id).await;

    harness
        .server
        .put(&format!("/restaurants/{}", id))
        .json(&json!({}))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(harness.get(&id).await, before);
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let harness = RestTestHarness::new();

    harness
        .server
        .put("/restaurants/missing")
        .json(&json!({"name": "Ghost"}))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    harness
        .server
        .put("/restaurants/missing")
        .json(&json!({}))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    assert_eq!(harness.count().await, 0);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let harness = RestTestHarness::new();
    let keep = harness.create(&fixtures::wendys()).await;
    let gone = harness.create(&fixtures::morris_park_bake_shop()).await;
    assert_eq!(harness.count().await, 2);

    let response = harness.server.delete(&format!("/restaurants/{}", gone)).await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.as_bytes().is_empty());

    assert_eq!(harness.count().await, 1);
    harness
        .server
        .get(&format!("/restaurants/{}", gone))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    harness
        .server
        .get(&format!("/restaurants/{}", keep))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_delete_unknown_id_is_404() {
    let harness = RestTestHarness::new();
    harness.create(&fixtures::wendys()).await;

    harness
        .server
        .delete("/restaurants/missing")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert_eq!(harness.count().await, 1);
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_creates_yield_unique_ids() {
    const N: usize = 16;
    let harness = RestTestHarness::new();
    let app = harness.router();

    let mut handles = Vec::with_capacity(N);
    for i in 0..N {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let request = Request::builder()
                .method("POST")
                .uri("/restaurants")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    fixtures::minimal(&format!("Parallel {}", i)).to_string(),
                ))
                .unwrap();

            let response = app.oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);

            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            body["id"].as_str().unwrap().to_string()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids.len(), N);
    assert_eq!(harness.count().await, N as u64);
}
