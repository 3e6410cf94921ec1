//! Relay client for the Hugging Face Inference API.
//!
//! Sends the user message as `{ "inputs": ... }` and extracts the first
//! element's `generated_text` from the response array. Mirrors the wire
//! shapes of the non-streaming text-generation endpoint.

use std::time::Duration;

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::RelayConfig;
use crate::error_handler::{RelayError, Result};

/// Thin client for the Inference API.
///
/// Built once from a [`RelayConfig`]; reuses one HTTP client with the
/// configured timeout across calls.
pub struct InferenceService {
    client: reqwest::Client,
    api_url: String,
}

impl InferenceService {
    /// Creates a new [`InferenceService`] from the given config.
    ///
    /// # Errors
    /// - [`RelayError::MissingApiKey`] if `cfg.api_key` is empty
    /// - [`RelayError::InvalidEndpoint`] if `cfg.api_url` is invalid
    /// - [`RelayError::Transport`] if the HTTP client cannot be built
    pub fn new(cfg: RelayConfig) -> Result<Self> {
        if cfg.api_key.trim().is_empty() {
            return Err(RelayError::MissingApiKey);
        }

        let endpoint = cfg.api_url.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(RelayError::InvalidEndpoint(cfg.api_url));
        }

        let mut headers = header::HeaderMap::new();
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", cfg.api_key.trim()))
            .map_err(|_| RelayError::MissingApiKey)?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(60));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_url: endpoint.to_string(),
        })
    }

    /// Relays one message and returns the generated reply.
    ///
    /// # Errors
    /// - [`RelayError::HttpStatus`] for non-2xx responses
    /// - [`RelayError::Transport`] for client errors
    /// - [`RelayError::Decode`] if the response cannot be parsed
    /// - [`RelayError::EmptyResponse`] if the generation list is empty
    #[instrument(skip_all)]
    pub async fn generate(&self, message: &str) -> Result<String> {
        let body = InferenceRequest { inputs: message };

        debug!("POST {}", self.api_url);
        let resp = self.client.post(&self.api_url).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.api_url.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = text.chars().take(240).collect::<String>();
            return Err(RelayError::HttpStatus {
                status,
                url,
                snippet,
            });
        }

        let out: Vec<Generation> = resp
            .json()
            .await
            .map_err(|e| RelayError::Decode(format!("serde error: {e}")))?;

        out.into_iter()
            .next()
            .map(|g| g.generated_text)
            .ok_or(RelayError::EmptyResponse)
    }
}

/// Request body: the user message under `inputs`.
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// One element of the response array.
#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_API_URL;

    #[test]
    fn rejects_empty_api_key() {
        let cfg = RelayConfig::with_key("  ");
        assert!(matches!(
            InferenceService::new(cfg),
            Err(RelayError::MissingApiKey)
        ));
    }

    #[test]
    fn rejects_schemeless_endpoint() {
        let cfg = RelayConfig {
            api_url: "api-inference.huggingface.co/models/x".into(),
            api_key: "hf_token".into(),
            timeout_secs: None,
        };
        assert!(matches!(
            InferenceService::new(cfg),
            Err(RelayError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn accepts_default_config() {
        let cfg = RelayConfig::with_key("hf_token");
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert!(InferenceService::new(cfg).is_ok());
    }

    #[test]
    fn request_wire_shape() {
        let body = InferenceRequest { inputs: "hello" };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "inputs": "hello" }));
    }

    #[test]
    fn response_wire_shape() {
        let parsed: Vec<Generation> =
            serde_json::from_str(r#"[{"generated_text":"hi there"}]"#).unwrap();
        assert_eq!(parsed[0].generated_text, "hi there");
    }
}
