use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use discovery::SearchReport;

use crate::server::app::AppState;

#[derive(Deserialize)]
pub struct SearchParams {
    molecule_name: String,
}

/// Full patent discovery for one molecule.
///
/// Provider flakiness degrades to a 200 with partial data and per-source
/// statuses; a 500 here means the orchestration itself broke.
pub async fn search_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchReport>, (StatusCode, String)> {
    match state.pipeline.run(&params.molecule_name).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            tracing::error!(molecule = %params.molecule_name, error = %e, "Search pipeline failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
