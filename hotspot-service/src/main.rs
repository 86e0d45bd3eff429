use hotspot_service::config::HotspotConfig;
use hotspot_service::startup::Application;
use service_core::observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = HotspotConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    );
    init_metrics();

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start hotspot-service: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    if !app.store().is_connected() {
        tracing::warn!("Serving without a document store; hotspot endpoints will fail");
    }

    app.run_until_stopped().await
}
