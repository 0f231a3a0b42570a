//! Application setup and router wiring.

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use discovery::{DiscoveryPipeline, PipelineConfig};
use inpi_client::InpiClient;
use pubchem_client::PubChemClient;
use serpapi_client::{JsonFileStore, KeyPool, SerpApiClient};

use crate::config::Config;
use crate::kernel::{
    InpiCrawlerProvider, PoolKeySource, PubChemProvider, SerpFamilyProvider, SerpSearchProvider,
};
use crate::server::routes::{
    health_handler, root_handler, search_handler, serpapi_key_handler, serpapi_status_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<DiscoveryPipeline>,
    pub pool: Arc<KeyPool<JsonFileStore>>,
}

/// Build the Axum application router
pub fn build_app(config: &Config) -> Router {
    let pool = Arc::new(KeyPool::new(
        JsonFileStore::new(&config.serpapi_pool_path),
        config.serpapi_keys.clone(),
    ));

    let serpapi = Arc::new(SerpApiClient::new());

    let mut pipeline_config = PipelineConfig::default();
    if let Some(expected) = config.expected_baseline {
        pipeline_config.expected_baseline = expected;
    }

    let pipeline = Arc::new(DiscoveryPipeline::new(
        Arc::new(PubChemProvider::new(PubChemClient::new())),
        Arc::new(SerpSearchProvider::new(serpapi.clone())),
        Arc::new(SerpFamilyProvider::new(serpapi)),
        Arc::new(InpiCrawlerProvider::new(InpiClient::new(config.inpi_url.clone()))),
        Arc::new(PoolKeySource::new(pool.clone())),
        pipeline_config,
    ));

    let state = AppState { pipeline, pool };

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/v1/search", get(search_handler))
        .route("/api/v1/serpapi/status", get(serpapi_status_handler))
        .route("/api/v1/serpapi/key", get(serpapi_key_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}
