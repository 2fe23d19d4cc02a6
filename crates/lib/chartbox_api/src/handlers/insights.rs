//! Insights handler — model commentary on described chart data.

use axum::Json;
use axum::extract::State;
use chartbox_core::genai::prompts;
use serde::Deserialize;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::InsightsResponse;

/// `POST /api/insights` request body.
#[derive(Debug, Deserialize)]
pub struct InsightsRequest {
    #[serde(default)]
    pub description: String,
}

/// `POST /api/insights` — return the model's insight text verbatim.
///
/// No JSON extraction here: the model is asked for prose and its reply is
/// passed through untouched.
pub async fn insights_handler(
    State(state): State<AppState>,
    Json(body): Json<InsightsRequest>,
) -> AppResult<Json<InsightsResponse>> {
    if body.description.is_empty() {
        return Err(AppError::Validation("Description is required".into()));
    }

    let insights = state
        .model
        .complete(&prompts::insights_prompt(&body.description))
        .await?;

    Ok(Json(InsightsResponse {
        success: true,
        insights,
    }))
}
