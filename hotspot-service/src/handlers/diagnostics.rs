use crate::services::{probe, StatusReport};
use crate::startup::AppState;
use axum::{extract::State, Json};

/// Always 200; failures are described inside the report.
#[tracing::instrument(skip(state))]
pub async fn test_database(State(state): State<AppState>) -> Json<StatusReport> {
    Json(probe(&state.store, &state.config.database).await)
}
