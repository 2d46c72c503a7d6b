// Web server — Axum-based JSON API.
//
// One rating endpoint plus a health probe. All responses are JSON;
// errors carry a {"detail": "..."} body.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::pipeline::RatingPipeline;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<RatingPipeline>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(pipeline: Arc<RatingPipeline>) -> Self {
        Self {
            pipeline,
            started_at: Utc::now(),
        }
    }
}

/// Start the web server and block until it exits.
pub async fn run_server(pipeline: Arc<RatingPipeline>, bind: &str, port: u16) -> Result<()> {
    let app = build_router(AppState::new(pipeline));

    let addr = format!("{bind}:{port}");
    info!("Review rating service listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/rate", post(handlers::rate::rate_review))
        .route("/health", get(handlers::health::health))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "detail": message }))).into_response()
}
