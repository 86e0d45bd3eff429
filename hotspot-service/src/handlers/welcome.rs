use crate::dtos::MessageResponse;
use axum::Json;

pub async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Ocean Trash Management Backend Running".to_string(),
    })
}

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!".to_string(),
    })
}
