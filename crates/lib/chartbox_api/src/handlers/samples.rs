//! Sample dataset handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use chartbox_core::chart::format::{ChartKind, format};
use serde::Deserialize;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ChartResponse, SampleIndexResponse};

use super::default_chart_type;

/// Query parameters for the single-dataset endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleQuery {
    #[serde(default = "default_chart_type")]
    pub chart_type: String,
}

/// `GET /api/sample-data` — all dataset names and full store contents.
pub async fn list_samples_handler(State(state): State<AppState>) -> Json<SampleIndexResponse> {
    Json(SampleIndexResponse {
        success: true,
        datasets: state.store.names().map(String::from).collect(),
        data: state
            .store
            .iter()
            .map(|(name, payload)| (name.to_string(), payload.clone()))
            .collect(),
    })
}

/// `GET /api/sample-data/{name}` — one dataset, formatted for the requested
/// chart kind.
pub async fn get_sample_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<SampleQuery>,
) -> AppResult<Json<ChartResponse>> {
    let payload = state
        .store
        .get(&name)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Dataset not found".into()))?;

    let kind = ChartKind::parse(&query.chart_type);
    Ok(Json(ChartResponse {
        success: true,
        chart_data: format(kind, payload),
        chart_type: query.chart_type,
    }))
}
