mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{sample_hotspot, TestApp};
use hotspot_service::services::HOTSPOT_COLLECTION;
use mongodb::bson::doc;
use serde_json::json;

#[tokio::test]
async fn listing_empty_collection_returns_empty_array() {
    let app = TestApp::with_memory_store();

    let (status, body) = app.get("/api/hotspots").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn created_hotspot_is_listed_without_identifier() {
    let app = TestApp::with_memory_store();

    let (status, body) = app.post_json("/api/hotspots", &sample_hotspot()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert!(!body["id"].as_str().unwrap().is_empty());

    let (status, body) = app.get("/api/hotspots").await;
    assert_eq!(status, StatusCode::OK);

    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    let hotspot = &listed[0];
    assert!(hotspot.get("_id").is_none());
    assert!(hotspot.get("id").is_none());
    assert_eq!(hotspot["name"], "Mediterranean Drift");
    assert_eq!(hotspot["latitude"], 38.2);
    assert_eq!(hotspot["longitude"], 15.6);
    assert_eq!(hotspot["density"], 95.5);
    assert_eq!(hotspot["area_km2"], 25000.0);
    assert_eq!(hotspot["description"], "Seasonal accumulation off Sicily");
    assert_eq!(hotspot["collected_kg"], 120.0);
    assert_eq!(hotspot["severity"], "medium");
    assert_eq!(hotspot["tags"], json!(["mediterranean", "microplastics"]));
}

#[tokio::test]
async fn optional_fields_take_defaults() {
    let app = TestApp::with_memory_store();
    let mut payload = sample_hotspot();
    for field in ["description", "collected_kg", "tags"] {
        payload.as_object_mut().unwrap().remove(field);
    }

    let (status, _) = app.post_json("/api/hotspots", &payload).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get("/api/hotspots").await;
    assert_eq!(body[0]["description"], serde_json::Value::Null);
    assert_eq!(body[0]["collected_kg"], 0.0);
    assert_eq!(body[0]["tags"], json!([]));
}

#[tokio::test]
async fn numeric_strings_are_accepted_on_create() {
    let app = TestApp::with_memory_store();
    let mut payload = sample_hotspot();
    payload["latitude"] = json!("-12.75");

    let (status, _) = app.post_json("/api/hotspots", &payload).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get("/api/hotspots").await;
    assert_eq!(body[0]["latitude"], -12.75);
}

#[tokio::test]
async fn missing_required_field_is_rejected_with_detail() {
    let app = TestApp::with_memory_store();
    let mut payload = sample_hotspot();
    payload.as_object_mut().unwrap().remove("name");

    let (status, body) = app.post_json("/api/hotspots", &payload).await;

    assert!(!status.is_success());
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].as_str().unwrap().contains("name"));

    let (_, listed) = app.get("/api/hotspots").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn out_of_range_latitude_is_rejected_before_write() {
    let app = TestApp::with_memory_store();
    let mut payload = sample_hotspot();
    payload["latitude"] = json!(123.0);

    let (status, body) = app.post_json("/api/hotspots", &payload).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].as_str().unwrap().contains("latitude"));
    let (_, listed) = app.get("/api/hotspots").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn malformed_body_is_reported_as_detail() {
    let app = TestApp::with_memory_store();

    let (status, body) = app
        .send(
            Request::builder()
                .method(Method::POST)
                .uri("/api/hotspots")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn limit_caps_listing() {
    let app = TestApp::with_memory_store();
    let (status, _) = app.post_empty("/api/seed-hotspots").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get("/api/hotspots?limit=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = app.get("/api/hotspots").await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn invalid_limit_is_reported_as_detail() {
    let app = TestApp::with_memory_store();

    let (status, body) = app.get("/api/hotspots?limit=many").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].as_str().unwrap().starts_with("Validation error"));
}

#[tokio::test]
async fn seeding_twice_duplicates_records() {
    let app = TestApp::with_memory_store();

    for _ in 0..2 {
        let (status, body) = app.post_empty("/api/seed-hotspots").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 4);
        assert_eq!(body["inserted"].as_array().unwrap().len(), 4);
    }

    let (_, body) = app.get("/api/hotspots").await;
    assert_eq!(body.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn seeded_great_pacific_patch_has_expected_fields() {
    let app = TestApp::with_memory_store();
    app.post_empty("/api/seed-hotspots").await;

    let (_, body) = app.get("/api/hotspots").await;
    let patch = body
        .as_array()
        .unwrap()
        .iter()
        .find(|h| h["name"] == "Great Pacific Garbage Patch")
        .expect("Great Pacific Garbage Patch not seeded");

    assert_eq!(patch["latitude"], 31.0);
    assert_eq!(patch["longitude"], -140.0);
    assert_eq!(patch["severity"], "critical");
    let tags = patch["tags"].as_array().unwrap();
    for tag in ["pacific", "gyre", "macroplastics"] {
        assert!(tags.contains(&json!(tag)), "missing tag {}", tag);
    }
}

#[tokio::test]
async fn corrupt_stored_record_fails_whole_listing() {
    let app = TestApp::with_memory_store();
    app.post_json("/api/hotspots", &sample_hotspot()).await;
    app.store
        .insert(HOTSPOT_COLLECTION, doc! { "name": "no coordinates" })
        .await
        .unwrap();

    let (status, body) = app.get("/api/hotspots").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].as_str().unwrap().contains("latitude"));
}

#[tokio::test]
async fn endpoints_fail_when_store_unavailable() {
    let app = TestApp::without_store();

    let (status, body) = app.get("/api/hotspots").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Document store unavailable");

    let (status, body) = app.post_json("/api/hotspots", &sample_hotspot()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Document store unavailable");

    let (status, body) = app.post_empty("/api/seed-hotspots").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Document store unavailable");
}

#[tokio::test]
async fn store_failures_surface_their_message() {
    let app = TestApp::with_failing_store();

    let (status, body) = app.get("/api/hotspots").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Document store error: read refused");

    let (status, body) = app.post_json("/api/hotspots", &sample_hotspot()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Document store error: write refused");

    let (status, body) = app.post_empty("/api/seed-hotspots").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Document store error: write refused");
}

#[tokio::test]
async fn create_accepts_body_without_content_type() {
    let app = TestApp::with_memory_store();

    let (status, body) = app
        .send(
            Request::builder()
                .method(Method::POST)
                .uri("/api/hotspots")
                .body(Body::from(sample_hotspot().to_string()))
                .unwrap(),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    let (_, listed) = app.get("/api/hotspots").await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn huge_integers_and_unknown_fields_are_accepted() {
    let app = TestApp::with_memory_store();
    let mut payload = sample_hotspot();
    payload["area_km2"] = json!(10_000_000_000_000_000_000_u64);
    payload["source_ref"] = json!(u64::MAX);

    let (status, body) = app.post_json("/api/hotspots", &payload).await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {}", body);

    let (_, listed) = app.get("/api/hotspots").await;
    assert_eq!(listed[0]["area_km2"], 1e19);
    assert!(listed[0].get("source_ref").is_none());
}
