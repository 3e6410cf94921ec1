//! Configuration for the relay client.

/// Inference endpoint the original deployment relayed to.
pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/blenderbot-400M-distill";

/// Configuration for one [`InferenceService`].
///
/// [`InferenceService`]: crate::inference_service::InferenceService
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Full model inference URL (scheme included).
    pub api_url: String,

    /// Bearer token for the Inference API.
    pub api_key: String,

    /// Optional request timeout in seconds; transport default when `None`.
    pub timeout_secs: Option<u64>,
}

impl RelayConfig {
    /// Config pointing at [`DEFAULT_API_URL`] with the given key.
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            timeout_secs: None,
        }
    }
}
