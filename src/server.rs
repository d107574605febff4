//! HTTP surface: routes, handlers and the serve loop.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::HashtagError;
use crate::hashtagger::HashtagGenerator;
use crate::models::{HashtagRequest, HashtagResponse, Health};

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "Hashtag Generator API";

#[derive(Clone)]
struct AppState {
    generator: Arc<HashtagGenerator>,
}

/// Builds the service router around a shared generator.
pub fn router(generator: Arc<HashtagGenerator>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/hashtags", post(generate_hashtags))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { generator })
}

async fn health() -> Json<Health> {
    Json(Health {
        ok: true,
        service: SERVICE_NAME,
    })
}

async fn generate_hashtags(
    State(state): State<AppState>,
    payload: Result<Json<HashtagRequest>, JsonRejection>,
) -> Result<Json<HashtagResponse>, HashtagError> {
    let Json(request) = payload.map_err(|rejection| HashtagError::Validation(rejection.body_text()))?;

    state
        .generator
        .generate(&request)
        .await
        .map(Json)
        .inspect_err(|error| warn!(%error, "hashtag request failed"))
}

/// Binds `config.addr` and serves until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the generator cannot be configured or the listener
/// cannot be bound.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let generator = config
        .build_generator()
        .context("Failed to configure Ollama client")?;
    let app = router(generator);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;
    info!(
        "listening on http://{} (default model {})",
        config.addr, config.default_model
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
