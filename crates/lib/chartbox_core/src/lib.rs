//! # chartbox_core
//!
//! Core domain logic for Chartbox: chart data model, per-kind formatting,
//! sample datasets, model-output extraction, and the Gemini client.

pub mod chart;
pub mod genai;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
