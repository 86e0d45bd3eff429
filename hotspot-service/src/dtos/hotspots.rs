use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct HotspotListParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateHotspotResponse {
    pub id: String,
    pub ok: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeedResponse {
    pub inserted: Vec<String>,
    pub count: usize,
}
