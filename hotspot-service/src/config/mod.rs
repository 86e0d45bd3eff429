use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct HotspotConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub service_name: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub database: DatabaseConfig,
    pub store: StoreConfig,
}

/// Connection settings for the document store. Either may be absent; the
/// service still starts and reports the store as unavailable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub backend: StoreBackend,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl HotspotConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common config handles .env, the configuration file and PORT.
        let common_config = core_config::Config::load()?;

        Ok(HotspotConfig {
            common: common_config,
            service_name: get_env("SERVICE_NAME", "hotspot-service"),
            log_level: get_env("LOG_LEVEL", "info"),
            otlp_endpoint: optional_env("OTLP_ENDPOINT"),
            database: DatabaseConfig {
                url: optional_env("DATABASE_URL"),
                name: optional_env("DATABASE_NAME"),
            },
            store: StoreConfig {
                backend: get_env("STORE_BACKEND", "mongo")
                    .parse()
                    .map_err(|e: String| AppError::Config(anyhow::anyhow!(e)))?,
            },
        })
    }
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(format!("Invalid store backend: {}", s)),
        }
    }
}

fn get_env(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Unset and empty variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
