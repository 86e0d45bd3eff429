use crate::config::HotspotConfig;
use crate::handlers;
use crate::services::StoreHandle;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    http_trace_layer, metrics_middleware, permissive_cors, request_id_middleware,
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;

#[derive(Clone)]
pub struct AppState {
    pub config: HotspotConfig,
    pub store: StoreHandle,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::read_root))
        .route("/api/hello", get(handlers::hello))
        .route("/test", get(handlers::test_database))
        .route(
            "/api/hotspots",
            get(handlers::list_hotspots).post(handlers::create_hotspot),
        )
        .route("/api/seed-hotspots", post(handlers::seed_hotspots))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .layer(from_fn(metrics_middleware))
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
        .layer(permissive_cors())
        .with_state(state)
}

pub struct Application {
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: HotspotConfig) -> Result<Self, AppError> {
        let store = StoreHandle::initialize(&config).await;

        let state = AppState {
            config: config.clone(),
            store,
        };

        let app = build_router(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn store(&self) -> &StoreHandle {
        &self.state.store
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
