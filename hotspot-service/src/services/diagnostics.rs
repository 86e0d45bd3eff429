//! Read-only probe behind `GET /test`.
//!
//! The probe never fails. Problems found during a sub-check are written into
//! that sub-check's field as text, truncated to [`ERROR_TEXT_LIMIT`] characters.

use crate::config::DatabaseConfig;
use crate::services::StoreHandle;
use serde::{Deserialize, Serialize};

pub const COLLECTION_LIMIT: usize = 10;
pub const ERROR_TEXT_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub async fn probe(store: &StoreHandle, config: &DatabaseConfig) -> StatusReport {
    let mut report = StatusReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: presence(config.url.is_some()),
        database_name: presence(config.name.is_some()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match store {
        StoreHandle::Connected(store) => {
            report.database = "✅ Available".to_string();
            report.connection_status = "Connected".to_string();

            match store.list_collection_names().await {
                Ok(mut names) => {
                    names.truncate(COLLECTION_LIMIT);
                    report.collections = names;
                    report.database = "✅ Connected & Working".to_string();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Diagnostics could not list collections");
                    report.database =
                        format!("⚠️  Connected but Error: {}", truncate(&e.to_string()));
                }
            }
        }
        StoreHandle::Unavailable { reason } => {
            tracing::debug!(reason = %reason, "Diagnostics found no document store");
            report.database = "⚠️  Available but not initialized".to_string();
        }
    }

    report
}

fn presence(set: bool) -> String {
    if set { "✅ Set" } else { "❌ Not Set" }.to_string()
}

fn truncate(text: &str) -> String {
    text.chars().take(ERROR_TEXT_LIMIT).collect()
}
