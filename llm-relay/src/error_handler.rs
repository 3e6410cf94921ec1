//! Unified error handling for `llm-relay`.
//!
//! All messages include the prefix `[LLM Relay]` to simplify attribution
//! in logs.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the crate.
pub type Result<T> = std::result::Result<T, RelayError>;

/// Errors produced by [`InferenceService`].
///
/// [`InferenceService`]: crate::inference_service::InferenceService
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RelayError {
    /// No API key was configured.
    #[error("[LLM Relay] missing API key")]
    MissingApiKey,

    /// Invalid endpoint (empty or missing http/https).
    #[error("[LLM Relay] invalid inference endpoint: {0}")]
    InvalidEndpoint(String),

    /// Transport/HTTP client error.
    #[error("[LLM Relay] transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-successful HTTP status from upstream.
    #[error("[LLM Relay] unexpected HTTP status {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body.
        snippet: String,
    },

    /// Unexpected/invalid JSON response.
    #[error("[LLM Relay] failed to decode response: {0}")]
    Decode(String),

    /// Upstream answered with an empty generation list.
    #[error("[LLM Relay] upstream returned no generated text")]
    EmptyResponse,
}
