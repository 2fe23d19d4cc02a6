//! # chartbox_api
//!
//! HTTP API library for Chartbox.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use chartbox_core::chart::samples::SampleStore;
use chartbox_core::genai::TextCompletion;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{analyze, health, insights, samples};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Demo datasets, immutable after startup.
    pub store: Arc<SampleStore>,
    /// Text-completion client (Gemini in production, a stub in tests).
    pub model: Arc<dyn TextCompletion>,
    /// API configuration.
    pub config: ApiConfig,
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/sample-data", get(samples::list_samples_handler))
        .route("/api/sample-data/{name}", get(samples::get_sample_handler))
        .route("/api/analyze", post(analyze::analyze_handler))
        .route("/api/insights", post(insights::insights_handler))
        .route("/api/health", get(health::health_handler))
        .layer(cors)
        .with_state(state)
}
