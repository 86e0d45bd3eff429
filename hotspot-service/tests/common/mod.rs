use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use hotspot_service::config::{DatabaseConfig, HotspotConfig, StoreBackend, StoreConfig};
use hotspot_service::services::{DocumentStore, MemoryStore, StoreHandle};
use hotspot_service::{build_router, AppState};
use http_body_util::BodyExt;
use mongodb::bson::Document;
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use tower::util::ServiceExt;

/// Store whose every operation fails, as a dropped connection would.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    fn database_name(&self) -> &str {
        "failing"
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Store(anyhow::anyhow!("ping refused")))
    }

    async fn insert(&self, _: &str, _: Document) -> Result<String, AppError> {
        Err(AppError::Store(anyhow::anyhow!("write refused")))
    }

    async fn find(&self, _: &str, _: Document, _: Option<i64>) -> Result<Vec<Document>, AppError> {
        Err(AppError::Store(anyhow::anyhow!("read refused")))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Err(AppError::Store(anyhow::anyhow!("listing refused")))
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: StoreHandle,
}

pub fn test_config(database: DatabaseConfig) -> HotspotConfig {
    HotspotConfig {
        common: CoreConfig { port: 0 },
        service_name: "hotspot-service".to_string(),
        log_level: "error".to_string(),
        otlp_endpoint: None,
        database,
        store: StoreConfig {
            backend: StoreBackend::Memory,
        },
    }
}

impl TestApp {
    pub fn new(store: StoreHandle, database: DatabaseConfig) -> Self {
        let state = AppState {
            config: test_config(database),
            store: store.clone(),
        };
        TestApp {
            router: build_router(state),
            store,
        }
    }

    /// App backed by a fresh in-memory store.
    pub fn with_memory_store() -> Self {
        Self::new(
            StoreHandle::connected(MemoryStore::new("hotspot_test")),
            DatabaseConfig {
                url: Some("memory://".to_string()),
                name: Some("hotspot_test".to_string()),
            },
        )
    }

    /// App connected to a store that fails every call.
    pub fn with_failing_store() -> Self {
        Self::new(
            StoreHandle::connected(FailingStore),
            DatabaseConfig {
                url: Some("mongodb://unreachable:27017".to_string()),
                name: Some("hotspot_test".to_string()),
            },
        )
    }

    /// App whose store never initialised.
    pub fn without_store() -> Self {
        Self::new(
            StoreHandle::unavailable("DATABASE_URL or DATABASE_NAME not set"),
            DatabaseConfig::default(),
        )
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Failed to parse JSON")
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(
        &self,
        uri: &str,
        body: &serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn post_empty(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }
}

pub fn sample_hotspot() -> serde_json::Value {
    serde_json::json!({
        "name": "Mediterranean Drift",
        "latitude": 38.2,
        "longitude": 15.6,
        "density": 95.5,
        "area_km2": 25000,
        "description": "Seasonal accumulation off Sicily",
        "collected_kg": 120,
        "severity": "medium",
        "tags": ["mediterranean", "microplastics"]
    })
}
