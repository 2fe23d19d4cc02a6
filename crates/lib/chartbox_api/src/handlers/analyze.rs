//! Analyze handler — free-text query to chart data via the model.

use axum::Json;
use axum::extract::State;
use chartbox_core::chart::extract::extract_chart_payload;
use chartbox_core::chart::format::{ChartKind, format};
use chartbox_core::genai::prompts;
use serde::Deserialize;
use tracing::warn;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::ChartResponse;

use super::default_chart_type;

/// `POST /api/analyze` request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_chart_type")]
    pub chart_type: String,
}

/// `POST /api/analyze` — ask the model for chart data matching the query.
///
/// Unusable model output is not an error: the extraction falls back to a
/// fixed demo payload carrying the raw model text as its insight.
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeRequest>,
) -> AppResult<Json<ChartResponse>> {
    if body.query.is_empty() {
        return Err(AppError::Validation("Query is required".into()));
    }

    let prompt = prompts::chart_data_prompt(&body.query, &body.chart_type);
    let raw = state.model.complete(&prompt).await?;

    let extraction = extract_chart_payload(&raw);
    if extraction.is_fallback() {
        warn!(
            chart_type = %body.chart_type,
            "model output was not usable chart JSON, serving fallback payload"
        );
    }

    let kind = ChartKind::parse(&body.chart_type);
    Ok(Json(ChartResponse {
        success: true,
        chart_data: format(kind, extraction.into_payload()),
        chart_type: body.chart_type,
    }))
}
