use axum::{response::IntoResponse, Json};
use serde_json::json;

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "GenAI Stack API is running!" }))
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}
