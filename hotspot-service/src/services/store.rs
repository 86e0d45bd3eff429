use crate::config::{HotspotConfig, StoreBackend};
use crate::services::{MemoryStore, MongoStore};
use async_trait::async_trait;
use mongodb::bson::Document;
use service_core::error::AppError;
use std::sync::Arc;

/// Collection holding every hotspot record.
pub const HOTSPOT_COLLECTION: &str = "trashhotspot";

/// The only boundary between the service and persistent storage.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    fn database_name(&self) -> &str;

    async fn ping(&self) -> Result<(), AppError>;

    /// Persists one record and returns the store-assigned identifier.
    async fn insert(&self, collection: &str, record: Document) -> Result<String, AppError>;

    /// Records matching `filter` in store order. An empty filter matches
    /// everything; a `limit` of `None` or `0` returns every match.
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;
}

/// Process-wide store handle, created once at startup and shared read-only.
///
/// An `Unavailable` handle never reconnects; every operation on it fails
/// with [`AppError::StoreUnavailable`].
#[derive(Clone)]
pub enum StoreHandle {
    Connected(Arc<dyn DocumentStore>),
    Unavailable { reason: String },
}

impl StoreHandle {
    pub async fn initialize(config: &HotspotConfig) -> Self {
        match config.store.backend {
            StoreBackend::Memory => {
                tracing::info!("Using in-memory document store");
                Self::connected(MemoryStore::new(
                    config.database.name.as_deref().unwrap_or("hotspots"),
                ))
            }
            StoreBackend::Mongo => {
                let (Some(url), Some(name)) =
                    (config.database.url.as_deref(), config.database.name.as_deref())
                else {
                    tracing::warn!(
                        "DATABASE_URL or DATABASE_NAME not set; document store disabled"
                    );
                    return Self::unavailable("DATABASE_URL or DATABASE_NAME not set");
                };

                match MongoStore::connect(url, name).await {
                    Ok(store) => Self::connected(store),
                    Err(e) => {
                        tracing::warn!(error = %e, "Document store disabled after failed connection");
                        Self::unavailable(e.to_string())
                    }
                }
            }
        }
    }

    pub fn connected(store: impl DocumentStore + 'static) -> Self {
        tracing::info!(database = %store.database_name(), "Document store ready");
        StoreHandle::Connected(Arc::new(store))
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        StoreHandle::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, StoreHandle::Connected(_))
    }

    pub fn store(&self) -> Result<&dyn DocumentStore, AppError> {
        match self {
            StoreHandle::Connected(store) => Ok(store.as_ref()),
            StoreHandle::Unavailable { .. } => Err(AppError::StoreUnavailable),
        }
    }

    pub async fn insert(&self, collection: &str, record: Document) -> Result<String, AppError> {
        self.store()?.insert(collection, record).await
    }

    pub async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError> {
        self.store()?.find(collection, filter, limit).await
    }
}
