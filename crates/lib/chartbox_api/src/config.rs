//! API server configuration.

use chartbox_core::genai::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use thiserror::Error;

/// Startup configuration errors. Fatal: the server refuses to start.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY environment variable is not set")]
    MissingApiKey,
}

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:5000").
    pub bind_addr: String,
    /// Gemini API key. Required.
    pub gemini_api_key: String,
    /// Gemini generation model name.
    pub gemini_model: String,
    /// Gemini API base URL (overridable for tests and proxies).
    pub gemini_base_url: String,
}

impl ApiConfig {
    /// Reads configuration from environment variables.
    ///
    /// | Variable          | Default                                      |
    /// |-------------------|----------------------------------------------|
    /// | `BIND_ADDR`       | `127.0.0.1:5000`                             |
    /// | `GEMINI_API_KEY`  | — (required; missing is a startup error)     |
    /// | `GEMINI_MODEL`    | `gemini-pro`                                 |
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".into()),
            gemini_api_key,
            gemini_model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars can't be safely mutated in parallel tests, so the defaults
    // are checked on a hand-built config.
    #[test]
    fn config_defaults() {
        let config = ApiConfig {
            bind_addr: "127.0.0.1:5000".into(),
            gemini_api_key: "test-key".into(),
            gemini_model: DEFAULT_MODEL.into(),
            gemini_base_url: DEFAULT_BASE_URL.into(),
        };
        assert_eq!(config.gemini_model, "gemini-pro");
        assert!(config.gemini_base_url.starts_with("https://"));
    }

    #[test]
    fn missing_key_error_names_the_variable() {
        let err = ConfigError::MissingApiKey;
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
