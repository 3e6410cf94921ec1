//! Thin client for the Hugging Face text-generation Inference API.
//!
//! One call shape: `POST {api_url}` with `{ "inputs": message }` and a
//! bearer token, non-streaming, returning the first generated text. No
//! retry, no queuing; a slow upstream blocks only the request that hit it.

pub mod config;
pub mod error_handler;
pub mod inference_service;

pub use config::RelayConfig;
pub use error_handler::{RelayError, Result};
pub use inference_service::InferenceService;
