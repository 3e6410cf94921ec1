//! The one capability behind `/chat`: resolve a message to a reply.
//!
//! Two interchangeable implementations, selected by configuration: the
//! remote inference relay and the local FAQ document lookup. The document
//! variant never fails at this boundary — the engine already folds its
//! failures into default replies.

use faq_match::{DocumentSource, MatchEngine};
use llm_relay::{InferenceService, RelayError};

use crate::core::app_state::ResolverConfig;
use crate::error_handler::AppError;

/// Deployment-selected chat backend.
pub enum ChatResolver {
    /// Relay to the remote text-generation API.
    Relay(InferenceService),
    /// Local best-effort FAQ lookup.
    Document(MatchEngine),
}

impl ChatResolver {
    /// Builds the resolver named by `config`.
    pub fn from_config(config: &ResolverConfig) -> Result<Self, AppError> {
        match config {
            ResolverConfig::Relay(relay) => {
                let service =
                    InferenceService::new(relay.clone()).map_err(AppError::RelayInit)?;
                Ok(ChatResolver::Relay(service))
            }
            ResolverConfig::Document { document_path } => Ok(ChatResolver::Document(
                MatchEngine::new(DocumentSource::new(document_path)),
            )),
        }
    }

    /// Resolves one message to a reply string.
    pub async fn resolve(&self, message: &str) -> Result<String, RelayError> {
        match self {
            ChatResolver::Relay(service) => service.generate(message).await,
            ChatResolver::Document(engine) => Ok(engine.resolve(message).await.into_reply()),
        }
    }
}
