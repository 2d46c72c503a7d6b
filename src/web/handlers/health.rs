// GET /health — liveness probe, always 200 OK.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use crate::web::AppState;

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = Utc::now().signed_duration_since(state.started_at);
    Json(serde_json::json!({
        "status": "ok",
        "started_at": state.started_at.to_rfc3339(),
        "uptime_secs": uptime.num_seconds(),
    }))
}
