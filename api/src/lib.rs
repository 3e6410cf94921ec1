//! HTTP layer: one `POST /chat` endpoint in front of the configured
//! [`ChatResolver`].
//!
//! [`ChatResolver`]: crate::core::resolver::ChatResolver

use std::sync::Arc;

use axum::http::{HeaderValue, Method, header};
use axum::{Router, routing::post};
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod core;
pub mod error_handler;
mod routes;

pub use error_handler::{AppError, AppResult};

use crate::core::app_state::{AppConfig, AppState, ConfigError};
use crate::routes::chat::chat_route::chat;

/// Builds the application router for the given shared state.
///
/// Cross-origin access is restricted to `cors_origin`; requests are traced
/// per HTTP span. Exposed separately from [`start`] so tests can drive the
/// router without binding a socket.
pub fn router(state: Arc<AppState>, cors_origin: &str) -> Result<Router, AppError> {
    let origin: HeaderValue =
        cors_origin
            .parse()
            .map_err(|_| ConfigError::InvalidFormat {
                var: "CORS_ALLOWED_ORIGIN",
                reason: "not a valid header value",
            })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(Router::new()
        .route("/chat", post(chat))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Builds the resolver from `config`, binds the listener, and serves until
/// Ctrl+C.
pub async fn start(config: AppConfig) -> Result<(), AppError> {
    let state = Arc::new(AppState::from_config(&config)?);
    let app = router(state, &config.cors_origin)?;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(AppError::Bind)?;

    info!(addr = %config.bind_addr, "server listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
