//! Application configuration and shared handler state.
//!
//! Configuration is read from the environment exactly once at startup and
//! carried as an explicit struct from there on; handlers never touch env
//! vars themselves.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use llm_relay::config::{DEFAULT_API_URL, RelayConfig};

use crate::core::resolver::ChatResolver;
use crate::error_handler::AppError;

/// Error enum for environment-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse.
    #[error("invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `LLM_TIMEOUT_SECS`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u64`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g., invalid header value).
    #[error("invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name.
        var: &'static str,
        /// Explanation.
        reason: &'static str,
    },

    /// Unsupported mode in `CHAT_RESOLVER`.
    #[error("unsupported chat resolver: {0} (expected `relay` or `document`)")]
    UnsupportedResolver(String),
}

/// Which backend answers `/chat`, with its mode-specific settings.
#[derive(Debug, Clone)]
pub enum ResolverConfig {
    /// Relay every message to the remote inference API.
    Relay(RelayConfig),
    /// Answer locally from the FAQ document at this path.
    Document {
        /// Path of the question/answer document.
        document_path: PathBuf,
    },
}

/// Full application configuration, assembled at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen address, e.g. `0.0.0.0:3000`.
    pub bind_addr: String,
    /// Origin allowed by the CORS layer.
    pub cors_origin: String,
    /// Selected resolver mode.
    pub resolver: ResolverConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `CHAT_RESOLVER` selects the mode (`relay` is the default); each
    /// mode then requires its own variables: `HUGGING_FACE_API_KEY` for
    /// relay, `FAQ_DOCUMENT_PATH` for document.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".into());
        let cors_origin =
            env::var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|_| "https://civilbrain.ai".into());

        let mode = env::var("CHAT_RESOLVER").unwrap_or_else(|_| "relay".into());
        let resolver = match mode.trim().to_lowercase().as_str() {
            "relay" => {
                let api_key = env::var("HUGGING_FACE_API_KEY")
                    .map_err(|_| ConfigError::MissingVar("HUGGING_FACE_API_KEY"))?;
                let api_url = env::var("HUGGING_FACE_API_URL")
                    .unwrap_or_else(|_| DEFAULT_API_URL.into());
                let timeout_secs = match env::var("LLM_TIMEOUT_SECS") {
                    Ok(raw) => Some(raw.parse().map_err(|_| ConfigError::InvalidNumber {
                        var: "LLM_TIMEOUT_SECS",
                        reason: "expected u64",
                    })?),
                    Err(_) => None,
                };

                ResolverConfig::Relay(RelayConfig {
                    api_url,
                    api_key,
                    timeout_secs,
                })
            }
            "document" => {
                let document_path = env::var("FAQ_DOCUMENT_PATH")
                    .map_err(|_| ConfigError::MissingVar("FAQ_DOCUMENT_PATH"))?;
                ResolverConfig::Document {
                    document_path: document_path.into(),
                }
            }
            other => return Err(ConfigError::UnsupportedResolver(other.to_string())),
        };

        Ok(Self {
            bind_addr,
            cors_origin,
            resolver,
        })
    }
}

/// Shared state for all HTTP handlers.
pub struct AppState {
    /// The capability answering `/chat`, selected by configuration.
    pub resolver: ChatResolver,
}

impl AppState {
    /// Build shared state from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        Ok(Self {
            resolver: ChatResolver::from_config(&config.resolver)?,
        })
    }
}
