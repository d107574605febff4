/// Ollama HTTP client implementation.
///
/// This module provides `OllamaClient` for making async HTTP requests to the Ollama API,
/// along with error types and builder patterns for configuration.
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use super::types::{GenerateRequest, GenerateResponse};

/// Base URL used when neither the builder nor `OLLAMA_HOST` provides one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur when interacting with the Ollama API.
#[derive(Debug, Error)]
pub enum OllamaError {
    /// Network-related errors (connection failures, DNS resolution, etc.)
    #[error("could not contact Ollama: {}", error_chain(.0))]
    Network(#[source] reqwest::Error),

    /// Request or response timeout errors
    #[error("request to Ollama timed out: {}", error_chain(.0))]
    Timeout(#[source] reqwest::Error),

    /// Non-success status with the reason phrase and raw body
    #[error("Ollama responded {status} {reason}: {body}")]
    Http {
        status: u16,
        reason: String,
        body: String,
    },

    /// The response envelope did not match the generate response shape
    #[error("failed to deserialize Ollama response: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The envelope parsed but carried no generated text
    #[error("Ollama response contains no data")]
    EmptyResponse,

    /// Invalid URL configuration error
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Renders an error followed by each error in its `source()` chain.
///
/// `reqwest::Error` only displays the outermost layer, which hides causes such
/// as a refused connection or a failed DNS lookup.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}

/// Prepends `http://` to a URL that has no scheme.
///
/// `OLLAMA_HOST` is commonly set to a bare `host:port` such as `127.0.0.1:11434`.
fn with_default_scheme(url: String) -> String {
    if url.contains("://") {
        url
    } else {
        format!("http://{url}")
    }
}

impl OllamaError {
    /// Classifies a transport failure as a timeout or a generic network error.
    fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            OllamaError::Timeout(error)
        } else {
            OllamaError::Network(error)
        }
    }

    /// Returns `true` when the gateway could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, OllamaError::Network(_) | OllamaError::Timeout(_))
    }

    /// Returns `true` when Ollama rejected the structured-output schema.
    ///
    /// Some model and runtime combinations answer a `json_schema` format with
    /// `500` and an "invalid JSON schema" message instead of ignoring it.
    pub fn is_schema_rejection(&self) -> bool {
        match self {
            OllamaError::Http { status, body, .. } => {
                *status == 500 && body.to_ascii_lowercase().contains("invalid json schema")
            }
            _ => false,
        }
    }
}

/// Builder for constructing `OllamaClient` instances.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use hashtag_api::ollama::OllamaClientBuilder;
///
/// let client = OllamaClientBuilder::new()
///     .base_url("http://localhost:11434")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .expect("Failed to create client");
/// ```
#[derive(Debug, Default)]
pub struct OllamaClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl OllamaClientBuilder {
    /// Creates a new `OllamaClientBuilder` with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL for the Ollama API.
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL (e.g., "http://localhost:11434")
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the per-request timeout. Defaults to 60 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the `OllamaClient` with the configured settings.
    ///
    /// # Environment Variables
    ///
    /// If `base_url()` was not called, this method will check the `OLLAMA_HOST`
    /// environment variable. If not set, it defaults to `http://localhost:11434`.
    /// A value without a scheme (e.g. `127.0.0.1:11434`) is treated as `http`.
    ///
    /// # Errors
    ///
    /// Returns `OllamaError::InvalidUrl` if the base URL does not parse, or
    /// `OllamaError::Network` if the underlying HTTP client cannot be created.
    pub fn build(self) -> Result<OllamaClient, OllamaError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => std::env::var("OLLAMA_HOST").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        };
        let base_url = with_default_scheme(base_url.trim_end_matches('/').to_string());

        reqwest::Url::parse(&base_url)
            .map_err(|e| OllamaError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .build()
            .map_err(OllamaError::Network)?;

        Ok(OllamaClient {
            client,
            base_url,
            timeout,
        })
    }
}

/// Async HTTP client for the Ollama generate endpoint.
///
/// Built once at startup and shared; it holds no per-request state.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

/// Trait for Ollama API client operations.
///
/// This trait enables mocking in unit tests and provides a clean interface
/// for interacting with the Ollama API.
#[async_trait]
pub trait OllamaClientTrait: Send + Sync {
    /// Performs a single non-streaming generate call.
    ///
    /// # Errors
    ///
    /// Returns `OllamaError` for transport failures, non-success statuses,
    /// malformed envelopes, and envelopes without generated text.
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, OllamaError>;
}

impl OllamaClient {
    /// Returns the base URL configured for this client.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    async fn generate_internal(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, OllamaError> {
        let url = self.generate_url();
        debug!(%url, model = %request.model, "sending generate request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(OllamaError::from_transport)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(OllamaError::from_transport)?;

        if !status.is_success() {
            return Err(OllamaError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let envelope: GenerateResponse =
            serde_json::from_str(&body).map_err(OllamaError::Deserialization)?;

        if envelope.text().trim().is_empty() {
            return Err(OllamaError::EmptyResponse);
        }

        Ok(envelope)
    }
}

#[async_trait]
impl OllamaClientTrait for OllamaClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, OllamaError> {
        self.generate_internal(request).await
    }
}
