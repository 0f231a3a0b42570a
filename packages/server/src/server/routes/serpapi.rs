use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use serpapi_client::PoolStatus;

use crate::server::app::AppState;

/// Leading characters shown in the truncated display form of a key.
const KEY_DISPLAY_LEN: usize = 20;

#[derive(Serialize)]
pub struct KeyResponse {
    /// Truncated display form.
    key: String,
    /// The actual key, for callers that need to use it.
    full: String,
    name: String,
    used: u32,
    cap: u32,
    exhausted: bool,
}

/// Pool status rollup.
pub async fn serpapi_status_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<PoolStatus>, (StatusCode, String)> {
    match state.pool.status().await {
        Ok(status) => Ok(Json(status)),
        Err(e) => {
            tracing::error!(error = %e, "Pool status failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

/// Issue one credential and show it.
pub async fn serpapi_key_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<KeyResponse>, (StatusCode, String)> {
    match state.pool.acquire().await {
        Ok(issued) => {
            let truncated: String = issued.key.chars().take(KEY_DISPLAY_LEN).collect();
            Ok(Json(KeyResponse {
                key: format!("{truncated}..."),
                full: issued.key,
                name: issued.name,
                used: issued.used,
                cap: issued.cap,
                exhausted: issued.exhausted,
            }))
        }
        Err(e) => {
            tracing::error!(error = %e, "Key acquisition failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
