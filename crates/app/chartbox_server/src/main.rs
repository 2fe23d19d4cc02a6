//! Chartbox API server binary.

use std::sync::Arc;

use chartbox_api::config::ApiConfig;
use chartbox_core::chart::samples::SampleStore;
use chartbox_core::genai::GeminiClient;
use clap::Parser;
use tracing::{error, info};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "chartbox_server", about = "Chartbox API server")]
struct Args {
    /// Host to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,chartbox_api=debug,chartbox_core=debug".parse().unwrap()
            }),
        )
        .init();

    let args = Args::parse();

    // Missing credentials are a startup failure, not a per-request one.
    let mut config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };
    config.bind_addr = format!("{}:{}", args.host, args.port);

    info!(model = %config.gemini_model, "starting chartbox_server");

    let model = GeminiClient::new(config.gemini_api_key.clone())
        .with_model(config.gemini_model.clone())
        .with_base_url(config.gemini_base_url.clone());

    let state = chartbox_api::AppState {
        store: Arc::new(SampleStore::new()),
        model: Arc::new(model),
        config: config.clone(),
    };

    let app = chartbox_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "chartbox API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
