use crate::dtos::{CreateHotspotResponse, HotspotListParams, SeedResponse};
use crate::models::{self, Hotspot};
use crate::services::HOTSPOT_COLLECTION;
use crate::startup::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use metrics::counter;
use mongodb::bson::doc;
use service_core::error::AppError;

#[tracing::instrument(skip(state, params))]
pub async fn list_hotspots(
    State(state): State<AppState>,
    params: Result<Query<HotspotListParams>, QueryRejection>,
) -> Result<Json<Vec<Hotspot>>, AppError> {
    let Query(params) = params.map_err(|e| AppError::validation(e.body_text()))?;

    let records = state
        .store
        .find(HOTSPOT_COLLECTION, doc! {}, params.limit)
        .await?;

    // One bad record fails the whole listing; no partial results.
    let hotspots = records
        .into_iter()
        .map(|mut record| {
            record.remove("_id");
            Hotspot::parse(&record)
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            tracing::error!(error = %e, "Stored hotspot failed validation");
            e
        })?;

    counter!("hotspots_listed_total").increment(hotspots.len() as u64);
    Ok(Json(hotspots))
}

#[tracing::instrument(skip(state, body))]
pub async fn create_hotspot(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreateHotspotResponse>, AppError> {
    // Parsed by hand so a missing or non-JSON Content-Type is still accepted.
    let payload: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::validation(format!("request body is not valid JSON: {}", e)))?;
    let hotspot = Hotspot::from_json(&payload)?;

    let id = state
        .store
        .insert(HOTSPOT_COLLECTION, hotspot.to_document()?)
        .await?;

    counter!("hotspots_created_total").increment(1);
    tracing::info!(hotspot_id = %id, name = %hotspot.name, "Hotspot created");

    Ok(Json(CreateHotspotResponse { id, ok: true }))
}

/// Inserts the fixed demonstration records on every call. Repeated calls
/// create duplicates.
#[tracing::instrument(skip(state))]
pub async fn seed_hotspots(State(state): State<AppState>) -> Result<Json<SeedResponse>, AppError> {
    let mut inserted = Vec::new();
    for hotspot in models::seed_hotspots() {
        let id = state
            .store
            .insert(HOTSPOT_COLLECTION, hotspot.to_document()?)
            .await?;
        inserted.push(id);
    }

    counter!("hotspots_seeded_total").increment(inserted.len() as u64);
    tracing::info!(count = inserted.len(), "Seeded hotspots");

    Ok(Json(SeedResponse {
        count: inserted.len(),
        inserted,
    }))
}
