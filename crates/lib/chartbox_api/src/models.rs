//! Response models for the HTTP API.

use std::collections::BTreeMap;

use chartbox_core::chart::ChartPayload;
use serde::Serialize;

/// Error body: `{"error": <message>}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /api/sample-data` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleIndexResponse {
    pub success: bool,
    /// Dataset names, in store order.
    pub datasets: Vec<String>,
    /// Full contents of the store, keyed by dataset name.
    pub data: BTreeMap<String, ChartPayload>,
}

/// Chart response for `GET /api/sample-data/{name}` and `POST /api/analyze`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    pub success: bool,
    pub chart_data: ChartPayload,
    /// The requested kind, echoed back verbatim.
    pub chart_type: String,
}

/// `POST /api/insights` response.
#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub success: bool,
    pub insights: String,
}

/// `GET /api/health` response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
