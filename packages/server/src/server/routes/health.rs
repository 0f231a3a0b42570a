use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use serpapi_client::PoolStatus;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct ServiceInfo {
    status: String,
    version: String,
    features: Vec<String>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    serpapi_pool: Option<PoolStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Service banner
pub async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        features: vec![
            "PubChem profile".to_string(),
            "WO candidate search".to_string(),
            "BR family expansion".to_string(),
            "INPI crawler".to_string(),
            "Statistics".to_string(),
        ],
    })
}

/// Health check endpoint
///
/// Reports the SerpAPI pool status alongside liveness. Returns 200 OK while
/// the pool store is readable, 503 Service Unavailable otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    match state.pool.status().await {
        Ok(pool) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                serpapi_pool: Some(pool),
                error: None,
            }),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unhealthy".to_string(),
                serpapi_pool: None,
                error: Some(e.to_string()),
            }),
        ),
    }
}
