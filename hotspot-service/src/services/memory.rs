use crate::services::DocumentStore;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use service_core::error::AppError;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Document store kept in process memory.
///
/// Assigns `ObjectId`s like MongoDB and supports top-level equality filters.
/// Nothing survives a restart.
#[derive(Clone)]
pub struct MemoryStore {
    name: String,
    collections: Arc<RwLock<BTreeMap<String, Vec<Document>>>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

fn matches(record: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| record.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn database_name(&self) -> &str {
        &self.name
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn insert(&self, collection: &str, mut record: Document) -> Result<String, AppError> {
        let id = match record.get("_id") {
            Some(Bson::ObjectId(oid)) => oid.to_hex(),
            Some(Bson::String(id)) => id.clone(),
            Some(other) => other.to_string(),
            None => {
                let oid = ObjectId::new();
                record.insert("_id", oid);
                oid.to_hex()
            }
        };

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(record);

        Ok(id)
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError> {
        // Mongo treats 0 as "no limit" and a negative limit as its magnitude.
        let cap = match limit {
            None | Some(0) => usize::MAX,
            Some(n) => usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX),
        };

        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| matches(record, &filter))
                    .take(cap)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.collections.read().await.keys().cloned().collect())
    }
}
