//! HTTP boundary: axum router with permissive CORS.
//!
//! Every response, success or failure, carries the cross-origin headers;
//! the CORS layer also short-circuits OPTIONS preflights.

use crate::config::Config;
use crate::error::ScrapeError;
use crate::noon::{self, NoonClient, ScrapedProduct};
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Shared state: the HTTP client reused across requests. Immutable after
/// construction, so concurrent requests need no coordination.
pub struct AppState {
    pub client: NoonClient,
}

/// Request body for the scrape endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeRequest {
    pub product_url: String,
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        warn!("Scrape failed: {}", self);
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Builds the router with all endpoints and the CORS layer.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/scrape", post(handle_scrape))
        .layer(cors)
        .with_state(state)
}

/// Starts the service on the configured address and serves until shutdown.
pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let client = NoonClient::new(config)?;
    let app = router(Arc::new(AppState { client }));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

async fn handle_scrape(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScrapeRequest>,
) -> Result<Json<ScrapedProduct>, ScrapeError> {
    let product = noon::scrape(&state.client, &req.product_url).await?;
    Ok(Json(product))
}
