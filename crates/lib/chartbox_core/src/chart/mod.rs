//! Chart data model — typed records for chart payloads on the wire.
//!
//! Payloads use Chart.js-style field names (`backgroundColor`, `borderWidth`)
//! so the JSON shape matches what charting front-ends consume directly.
//!
//! # Public API
//!
//! - [`ChartPayload`] / [`Series`] — the chart data records
//! - [`ColorSpec`] — one color for the whole series, or one per data point
//! - [`format::format`] — reshape a payload for a requested chart kind
//! - [`samples::SampleStore`] — the built-in demo datasets
//! - [`extract::extract_chart_payload`] — parse model output with fallback

pub mod extract;
pub mod format;
pub mod samples;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a payload fails boundary validation.
#[derive(Debug, Error)]
pub enum ChartDataError {
    #[error("series '{label}' has {actual} data points but {expected} labels")]
    SeriesLengthMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },
}

/// A complete chart payload: categories, one or more series, and a free-text
/// insight line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    /// Ordered category names.
    pub labels: Vec<String>,
    /// Ordered data series.
    pub datasets: Vec<Series>,
    /// Free-text insight about the data; may be empty.
    #[serde(default)]
    pub insights: String,
}

impl ChartPayload {
    /// Check that every series has one data point per label.
    ///
    /// Applied at the model-output boundary only: sample datasets are
    /// constructed correct, and stored payloads are served as-is.
    pub fn validate(&self) -> Result<(), ChartDataError> {
        for series in &self.datasets {
            if series.data.len() != self.labels.len() {
                return Err(ChartDataError::SeriesLengthMismatch {
                    label: series.label.clone(),
                    expected: self.labels.len(),
                    actual: series.data.len(),
                });
            }
        }
        Ok(())
    }
}

/// One data series within a chart, with its styling metadata.
///
/// Optional fields are skipped when absent so pass-through payloads
/// serialize without styling noise.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Display name of the series.
    pub label: String,
    /// Data points, one per label.
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
}

/// Series color: a single color string, or one color per data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// One color for the whole series (bars, lines).
    Single(String),
    /// One color per data point (pie slices, per-bar colors).
    PerPoint(Vec<String>),
}
