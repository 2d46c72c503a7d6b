// POST /rate — rate a single review.
//
// Returns 200 with the rating result; a profanity rejection is a normal
// 200 with status=false. A failure in the rating stage maps to 500 with
// a detail message. Empty text is rejected with 422 before the pipeline
// runs.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::error;

use crate::web::{api_error, AppState};

/// Request body for POST /rate. Lives only for the duration of the call.
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub text: String,
}

pub async fn rate_review(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> Response {
    if request.text.trim().is_empty() {
        return api_error(StatusCode::UNPROCESSABLE_ENTITY, "text must not be empty");
    }

    match state.pipeline.rate(&request.text).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            error!(error = %e, "Rating pipeline failed");
            // {:#} flattens the context chain into one line for the body
            api_error(StatusCode::INTERNAL_SERVER_ERROR, &format!("{e:#}"))
        }
    }
}
