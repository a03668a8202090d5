//! Integration tests for the tracking backend.
//!
//! These run entirely in-process against the axum router with a real
//! in-memory store; no network access required.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use worktrack::api::{create_router, AppState};
use worktrack::item::NewWorkItem;
use worktrack::store::{seed_demo_data, MemoryStore, MockStore, ObjectStore};

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn seeded_app() -> Router {
    let store = Arc::new(MemoryStore::new());
    seed_demo_data(store.as_ref()).unwrap();
    create_router(AppState::new(store, "test"))
}

/// Creating an object shows up in the listing, the lookup, and the stats.
#[tokio::test]
async fn create_then_read_lifecycle() {
    let app = seeded_app();

    let (status, body) = get_json(app.clone(), "/api/objects").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 5);

    let (status, created) = post_json(
        app.clone(),
        "/api/objects",
        r#"{
            "name": "Pump station overhaul",
            "customer": "Harbor Terminal Co",
            "location": "Port Amble",
            "budget": 1000000,
            "description": "Overhaul of the transfer pump station"
        }"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "planning");
    let id = created["id"].as_u64().unwrap();
    assert_eq!(id, 6);

    let (status, body) = get_json(app.clone(), "/api/objects").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 6);
    // Newest first: the fresh item leads the listing.
    assert_eq!(body["objects"][0]["name"], "Pump station overhaul");

    let (status, fetched) = get_json(app.clone(), &format!("/api/objects/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], created["name"]);
    assert_eq!(fetched["created_at"], created["created_at"]);

    let (status, stats) = get_json(app, "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_objects"], 6);
    assert_eq!(stats["planning"], 3);
    assert_eq!(stats["total_budget"], 31_500_000);
    assert_eq!(stats["average_budget"], 5_250_000);
    // 1 of 6 completed
    assert_eq!(stats["completion_rate"], 16.7);
    assert_eq!(stats["degraded"], false);
}

/// A rejected create leaves every read surface unchanged.
#[tokio::test]
async fn failed_validation_leaves_the_collection_unchanged() {
    let app = seeded_app();

    let (status, body) = post_json(app.clone(), "/api/objects", r#"{"name": "   "}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_failed");

    let (_, body) = get_json(app.clone(), "/api/objects").await;
    assert_eq!(body["count"], 5);

    let (_, stats) = get_json(app, "/api/stats").await;
    assert_eq!(stats["total_objects"], 5);
}

/// When the store goes away, health degrades and stats serve the last known
/// good snapshot with an explicit flag.
#[tokio::test]
async fn outage_is_visible_but_not_fatal() {
    let store = Arc::new(MockStore::new());
    store.insert(NewWorkItem::named("Depot inspection")).unwrap();
    let app = create_router(AppState::new(store.clone(), "test"));

    // Prime the last-known-good snapshot while healthy.
    let (status, stats) = get_json(app.clone(), "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_objects"], 1);

    store.set_fail_reads(true);

    let (status, health) = get_json(app.clone(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "degraded");

    let (status, stats) = get_json(app.clone(), "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["degraded"], true);
    assert_eq!(stats["total_objects"], 1);

    let (status, body) = get_json(app.clone(), "/api/objects").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "store_unavailable");

    // Recovery: reads work again and the degraded flag clears.
    store.set_fail_reads(false);
    let (status, stats) = get_json(app, "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["degraded"], false);
}

/// The operational endpoints describe the same surface the router serves.
#[tokio::test]
async fn banner_docs_and_schedule_round_trip() {
    let app = seeded_app();

    let (status, banner) = get_json(app.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(banner["service"], "worktrack");

    let (status, docs) = get_json(app.clone(), "/docs").await;
    assert_eq!(status, StatusCode::OK);

    // Every documented GET endpoint that takes no parameters must be
    // routable.
    for endpoint in docs["endpoints"].as_array().unwrap() {
        let path = endpoint["path"].as_str().unwrap();
        if endpoint["method"] != "GET" || path.contains(':') || path == "/metrics" {
            continue;
        }
        let response = app
            .clone()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "endpoint {path}");
    }

    let (status, schedule) = get_json(app, "/api/schedule").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(schedule.as_array().unwrap().len(), 5);
}
